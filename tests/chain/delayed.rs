use chain_rail::prelude::*;

use crate::common::{Calls, TestError};

fn add_two_if_positive() -> impl Delayed<Start = i32, Context = (), Output = i32, Error = TestError> {
    prepare::<i32, (), TestError>()
        .on_success(|n, _| async move { if n < 0 { Err(TestError::Negative(n)) } else { Ok(n) } })
        .on_success(|n, _| succeed(n + 2))
}

#[tokio::test]
async fn root_echoes_its_input() {
    let root = prepare::<&str, (), TestError>();
    assert_eq!(root.run_async("same", ()).await, Ok("same"));
}

#[tokio::test]
async fn one_definition_runs_against_many_inputs() {
    let chain = add_two_if_positive();

    assert_eq!(chain.run_async(2, ()).await, Ok(4));
    assert_eq!(chain.run_async(-2, ()).await, Err(TestError::Negative(-2)));
    assert_eq!(chain.run_async(0, ()).await, Ok(2));
}

#[tokio::test]
async fn concurrent_runs_are_independent() {
    let chain = add_two_if_positive();

    let (positive, negative) = tokio::join!(chain.run_async(40, ()), chain.run_async(-1, ()));

    assert_eq!(positive, Ok(42));
    assert_eq!(negative, Err(TestError::Negative(-1)));
}

#[tokio::test]
async fn nothing_runs_at_definition_time() {
    let calls = Calls::default();
    let seen = calls.clone();

    let chain = prepare::<u8, (), TestError>().pass_through(move |_, _| {
        seen.hit();
        succeed(())
    });
    assert_eq!(calls.count(), 0);

    chain.run_async(1, ()).await.unwrap();
    chain.run_async(2, ()).await.unwrap();
    assert_eq!(calls.count(), 2);
}

#[tokio::test]
#[should_panic(expected = "step defect")]
async fn a_panicking_step_propagates_out_of_run_async() {
    let chain = prepare::<i32, (), TestError>()
        .on_success(|n, _| async move {
            if n > 0 {
                panic!("step defect");
            }
            Ok::<_, TestError>(n)
        })
        .on_error(|_, _| succeed::<i32, TestError>(0));

    let _ = chain.run_async(1, ()).await;
}

#[tokio::test]
#[should_panic(expected = "recovery defect")]
async fn a_panicking_lazy_recovery_propagates() {
    let chain = add_two_if_positive().on_error(|_, _| async move {
        tokio::task::yield_now().await;
        if true {
            panic!("recovery defect");
        }
        Ok::<i32, TestError>(0)
    });

    assert_eq!(chain.run_async(1, ()).await, Ok(3));
    let _ = chain.run_async(-1, ()).await;
}

#[tokio::test]
async fn every_run_gets_its_own_context() {
    let chain = prepare::<i32, Record<i32>, TestError>()
        .on_success(|n, context| async move {
            let offset = *context.require("offset").map_err(|_| TestError::Missing("offset"))?;
            Ok::<_, TestError>(n + offset)
        });

    assert_eq!(chain.run_async(1, record! { "offset" => 10 }).await, Ok(11));
    assert_eq!(chain.run_async(1, record! { "offset" => -1 }).await, Ok(0));
    assert_eq!(chain.run_async(1, Record::new()).await, Err(TestError::Missing("offset")));
}

#[tokio::test]
async fn lazy_recovery_and_data() {
    let chain = prepare::<Record<i32>, Record<i32>, TestError>()
        .add_data(|data, _| async move {
            match data.get("n") {
                Some(&n) if n < 0 => Err(TestError::Negative(n)),
                _ => Ok(record! { "checked" => 1 }),
            }
        })
        .on_error(|error, _| async move {
            match error {
                TestError::Negative(n) => Ok(record! { "n" => -n, "recovered" => 1 }),
                other => Err(other),
            }
        })
        .add_data_grouped(|all: Record<i32>| succeed(record! { "limit" => all.get("limit").copied().unwrap_or(0) }));

    let limits = record! { "limit" => 5 };
    assert_eq!(
        chain.run_async(record! { "n" => 3 }, limits.clone()).await,
        Ok(record! { "n" => 3, "checked" => 1, "limit" => 5 })
    );
    assert_eq!(
        chain.run_async(record! { "n" => -3 }, limits).await,
        Ok(record! { "n" => 3, "recovered" => 1, "limit" => 5 })
    );
}

#[tokio::test]
async fn grouped_builders_on_a_definition() {
    let chain = prepare::<Record<&'static str>, Record<&'static str>, TestError>()
        .pass_through_grouped(|all: Record<&'static str>| async move {
            all.require("tenant").map(|_| ()).map_err(|_| TestError::Missing("tenant"))
        })
        .on_success_grouped(|all: Record<&'static str>| {
            succeed(format!("{}@{}", all.get("user").copied().unwrap_or("?"), all.get("tenant").copied().unwrap_or("?")))
        });

    let tenant = record! { "tenant" => "acme" };
    assert_eq!(
        chain.run_async(record! { "user" => "alice" }, tenant).await,
        Ok("alice@acme".to_owned())
    );
    assert_eq!(
        chain.run_async(record! { "user" => "bob" }, Record::new()).await,
        Err(TestError::Missing("tenant"))
    );
}

#[tokio::test]
async fn explicit_steps_can_be_added() {
    let chain = prepare::<i32, (), TestError>().add(|previous: Outcome<i32, TestError>, _: ()| async move {
        previous.map(|n| n.to_string())
    });

    assert_eq!(chain.run_async(12, ()).await, Ok("12".to_owned()));
}

#[test]
fn definitions_are_clonable_values() {
    let chain = prepare::<i32, (), TestError>().on_success(|n, _| succeed(n + 1));
    let copy = chain.clone();
    let _ = (chain.step(), copy.previous());
}
