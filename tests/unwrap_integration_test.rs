use liftfil::{
    assert_unwrap_kind, lift, tfil, unwrap, unwrap_with, Chain, Failure, Handled, Outcome, Reason,
    RenderConfig, RenderStyle, Tagged, UnwrapError,
};

#[derive(Debug, PartialEq, thiserror::Error)]
#[error("account {account} is locked")]
struct AccountLocked {
    account: u32,
}

#[derive(Debug)]
enum Status {
    Fail,
}

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

#[test]
fn test_unwrap_success_payload() {
    init_logging();
    assert_eq!(unwrap(Tagged::<i32, Status>::Ok(42)), Ok(42));
}

#[test]
fn test_unwrap_plain_reason_mentions_reason() {
    init_logging();
    let err = assert_unwrap_kind!(unwrap(Tagged::<i32, Status>::err(Status::Fail)), Runtime);
    assert!(err.to_string().to_lowercase().contains("fail"));
}

#[test]
fn test_unwrap_reraises_same_object() {
    init_logging();
    let failure = Failure::new(AccountLocked { account: 7 });
    let input: Tagged<i32, Status> = Tagged::Err(Reason::Raised(failure.clone()));

    let err = assert_unwrap_kind!(unwrap(input), Raised);
    let raised = err.into_failure();

    assert!(raised.ptr_eq(&failure));
    assert_eq!(
        raised.downcast_ref::<AccountLocked>(),
        Some(&AccountLocked { account: 7 })
    );
}

#[test]
fn test_raised_reason_survives_a_pipeline() {
    init_logging();
    let failure = Failure::new(AccountLocked { account: 1 });
    let out: Outcome<i32, Status> = lift(Tagged::Err(Reason::Raised(failure.clone())), |v: i32| {
        Tagged::Raw(v + 1)
    });

    let err = out.unwrap_value().unwrap_err();
    assert!(err.as_failure().is_some_and(|f| f.ptr_eq(&failure)));
    assert_eq!(err.to_string(), "account 1 is locked");
}

#[test]
fn test_unwrap_raw_is_invalid_argument() {
    init_logging();
    let err = assert_unwrap_kind!(unwrap(Tagged::<i32, Status>::Raw(123)), InvalidArgument);
    assert!(err.to_string().contains("123"));
}

#[test]
fn test_unwrap_bare_marker_is_invalid_argument() {
    init_logging();
    assert_unwrap_kind!(unwrap(Tagged::<i32, Status>::ErrMarker), InvalidArgument);
}

#[test]
fn test_unwrap_marker_reason_is_runtime() {
    init_logging();
    let out: Outcome<i32, Status> = lift(Tagged::ErrMarker, |v: i32| Tagged::Raw(v));
    assert_unwrap_kind!(unwrap(out), Runtime);
}

#[test]
fn test_unwrap_with_pretty_style() {
    init_logging();
    let config = RenderConfig {
        style: RenderStyle::Pretty,
        max_len: None,
        include_kind: true,
    };
    let err = unwrap_with(Tagged::<i32, (u8, u8)>::err((1, 2)), &config).unwrap_err();
    assert!(matches!(err, UnwrapError::Runtime { .. }));
    assert!(err.to_string().starts_with("runtime error: (\n"));
}

#[test]
fn test_recovered_error_unwraps() {
    init_logging();
    let out = tfil(Tagged::<i32, Status>::err(Status::Fail), |_| {
        Handled::<i32, Status>::Ok(0)
    });
    assert_eq!(unwrap(out), Ok(0));
}
