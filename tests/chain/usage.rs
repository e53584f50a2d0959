//! End-to-end flows mixing data, context and recovery.

use chain_rail::prelude::*;
use chain_rail::Settled;

use crate::common::TestError;

fn services() -> Record<i32> {
    record! { "a" => 2, "b" => 3 }
}

fn add_services(data: i32, context: Record<i32>) -> Settled<i32, TestError> {
    if data > 0 {
        succeed(data + context.values().sum::<i32>())
    } else {
        fail(TestError::Negative(data))
    }
}

fn double<C>(data: i32, _: C) -> Settled<i32, TestError> {
    succeed(data * 2)
}

#[tokio::test]
async fn build_data_then_run_two_actions() {
    let outcome = start::<TestError>()
        .add_data(|(), _| succeed(record! { "a" => 2 }))
        .add_data(|_, _| succeed(record! { "b" => 3 }))
        .on_success(|data, _| match (data.get("a"), data.get("b")) {
            (Some(&a), Some(&b)) if b > 0 => succeed(a + b),
            _ => fail(TestError::Missing("b")),
        })
        .on_success(double)
        .await;

    assert_eq!(outcome, Ok(10));
}

#[tokio::test]
async fn add_two_services_then_run_actions() {
    let outcome = start_with::<_, TestError>(2)
        .add_context(record! { "a" => 2 })
        .add_context(record! { "b" => 3 })
        .on_success(add_services)
        .on_success(add_services)
        .on_success(double)
        .await;

    assert_eq!(outcome, Ok(24));
}

#[tokio::test]
async fn prepare_services_with_one_chain_and_use_them_in_another() {
    let prepared = start_with::<Record<i32>, TestError>(Record::new())
        .add_data(|_, _| succeed(record! { "a" => 2 }))
        .add_data(|_, _| succeed(record! { "b" => 3 }))
        .await;

    let context = prepared.expect("services failed");
    assert_eq!(context, services());

    let outcome = start_in(2, context)
        .on_success(add_services)
        .on_success(add_services)
        .on_success(double)
        .await;

    assert_eq!(outcome, Ok(24));
}

#[tokio::test]
async fn recover_from_an_error_between_actions() {
    let outcome = start_in(-2, services())
        .on_success(add_services)
        .on_error(|_, _| succeed(1))
        .on_success(add_services)
        .on_success(double)
        .await;

    assert_eq!(outcome, Ok(12));
}

#[tokio::test]
async fn a_raw_step_can_fail_the_chain() {
    let outcome = start_with::<i32, TestError>(-2)
        .add(|_: Outcome<i32, TestError>, _: ()| fail::<i32, _>(TestError::Replaced("error".into())))
        .await;

    assert_eq!(outcome, Err(TestError::Replaced("error".into())));
}

#[tokio::test]
async fn the_same_definition_serves_the_eager_result() {
    let definition = prepare::<i32, Record<i32>, TestError>()
        .on_success(add_services)
        .on_error(|_, _| succeed(1))
        .on_success(add_services)
        .on_success(double);

    let eager = start_in(-2, services())
        .on_success(add_services)
        .on_error(|_, _| succeed(1))
        .on_success(add_services)
        .on_success(double)
        .await;

    assert_eq!(definition.run_async(-2, services()).await, eager);
    assert_eq!(definition.run_async(2, services()).await, Ok(24));
}
