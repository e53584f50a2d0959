use chain_rail::prelude::*;
use chain_rail::Callback;

use crate::common::TestError;

async fn validate(previous: Outcome<i32, TestError>, _: ()) -> Outcome<i32, TestError> {
    match previous {
        Ok(n) if n < 0 => Err(TestError::Negative(n)),
        other => other,
    }
}

#[tokio::test]
async fn async_fns_are_steps() {
    let outcome = validate.call(Ok(-1), ()).await;
    assert_eq!(outcome, Err(TestError::Negative(-1)));

    let outcome = start_with(3).add(validate).await;
    assert_eq!(outcome, Ok(3));
}

#[tokio::test]
async fn steps_see_failures_too() {
    let outcome = start_with::<i32, TestError>(1)
        .on_success(|_, _| fail::<i32, _>(TestError::Missing("id")))
        .add(|previous: Outcome<i32, TestError>, _: ()| async move {
            Ok::<_, TestError>(previous.is_err())
        })
        .await;

    assert_eq!(outcome, Ok(true));
}

#[tokio::test]
async fn closures_are_callbacks() {
    let double = |n: i32, factor: i32| succeed::<_, TestError>(n * factor);
    assert_eq!(double.handle(4, 2).await, Ok(8));
}
