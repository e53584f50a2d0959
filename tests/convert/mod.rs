use chain_rail::prelude::*;

use crate::common::{Calls, TestError};

#[derive(Debug, Clone, PartialEq)]
enum FetchError {
    Rejected(String),
    Crashed(Option<String>),
}

fn to_fetch_error(thrown: Thrown<String>) -> FetchError {
    match thrown {
        Thrown::Error(reason) => FetchError::Rejected(reason),
        Thrown::Panic(panic) => FetchError::Crashed(panic.message().map(str::to_owned)),
    }
}

#[tokio::test]
async fn succeed_and_fail_settle_immediately() {
    assert_eq!(succeed::<_, TestError>(()).await, Ok(()));
    assert_eq!(succeed::<_, TestError>("value").await, Ok("value"));
    assert_eq!(fail::<(), _>(TestError::Missing("id")).await, Err(TestError::Missing("id")));
}

#[tokio::test]
async fn fail_moves_the_same_error_value() {
    let reason = String::from("kept");
    let pointer = reason.as_ptr();

    let error = fail::<(), _>(reason).await.unwrap_err();
    assert_eq!(error.as_ptr(), pointer);
}

#[tokio::test]
async fn convert_passes_success_through() {
    let outcome = convert(|| async { Ok::<_, String>(5) }, to_fetch_error).await;
    assert_eq!(outcome, Ok(5));
}

#[tokio::test]
async fn convert_maps_returned_errors() {
    let outcome = convert(|| async { Err::<u8, _>("refused".to_owned()) }, to_fetch_error).await;
    assert_eq!(outcome, Err(FetchError::Rejected("refused".into())));
}

#[tokio::test]
async fn convert_catches_a_panic_while_polling() {
    async fn explode() -> Result<u8, String> {
        tokio::task::yield_now().await;
        panic!("exploded after yielding")
    }

    let outcome = convert(explode, to_fetch_error).await;
    assert_eq!(outcome, Err(FetchError::Crashed(Some("exploded after yielding".into()))));
}

#[tokio::test]
async fn convert_catches_a_panic_before_the_future_exists() {
    fn build() -> core::future::Ready<Result<u8, String>> {
        panic!("could not build")
    }

    let outcome = convert(build, to_fetch_error).await;
    assert_eq!(outcome, Err(FetchError::Crashed(Some("could not build".into()))));
}

#[tokio::test]
async fn converted_failures_join_the_chain_error_type() {
    let outcome = start_with::<_, FetchError>("alice")
        .on_success(|name, _| convert(move || async move { Err::<u8, _>(format!("no {name}")) }, to_fetch_error))
        .on_success(|n: u8, _| succeed(n + 1))
        .await;

    assert_eq!(outcome, Err(FetchError::Rejected("no alice".into())));
}

#[tokio::test]
async fn convert_with_awaits_the_catch_mapper() {
    let reports = Calls::default();
    let seen = reports.clone();

    let outcome = convert_with(
        || async { Err::<u8, _>("refused".to_owned()) },
        move |thrown: Thrown<String>| async move {
            tokio::task::yield_now().await;
            seen.hit();
            to_fetch_error(thrown)
        },
    )
    .await;

    assert_eq!(outcome, Err(FetchError::Rejected("refused".into())));
    assert_eq!(reports.count(), 1);
}

#[tokio::test]
async fn convert_with_catches_a_panic_and_skips_the_mapper_on_success() {
    async fn explode() -> Result<u8, String> {
        panic!("async mapper sees this")
    }

    let crashed = convert_with(explode, |thrown| async move { to_fetch_error(thrown) }).await;
    assert_eq!(crashed, Err(FetchError::Crashed(Some("async mapper sees this".into()))));

    let reports = Calls::default();
    let seen = reports.clone();
    let fine = convert_with(
        || async { Ok::<_, String>(9) },
        move |thrown| async move {
            seen.hit();
            to_fetch_error(thrown)
        },
    )
    .await;

    assert_eq!(fine, Ok(9));
    assert_eq!(reports.count(), 0);
}
