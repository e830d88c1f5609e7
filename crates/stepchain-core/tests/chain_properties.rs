//! Propiedades básicas de `StepChain`: cada forma de step ve el contexto
//! esperado, se invoca una sola vez y deja el contexto correcto.

use std::cell::{Cell, RefCell};

use stepchain_core::{Empty, StepChain, StepError};

#[test]
fn action_runs_once_and_keeps_context() {
    let calls = Cell::new(0);
    let chain = StepChain::with(String::from("ctx")).apply_action(|| {
                                                      calls.set(calls.get() + 1);
                                                      Ok(())
                                                  })
                                                  .expect("action ok");
    assert_eq!(calls.get(), 1);
    assert_eq!(chain.context(), "ctx");
}

#[test]
fn consumer_sees_current_context_and_keeps_it() {
    let seen: RefCell<Vec<i32>> = RefCell::new(Vec::new());
    let chain = StepChain::with(42).apply_consumer(|v: &i32| {
                                       seen.borrow_mut().push(*v);
                                       Ok(())
                                   })
                                   .expect("consumer ok");
    assert_eq!(*seen.borrow(), vec![42]);
    assert_eq!(chain.into_context(), 42);
}

#[test]
fn producer_replaces_context_regardless_of_previous() {
    let from_empty = StepChain::new().apply_producer(|| Ok("r")).expect("producer ok");
    let from_value = StepChain::with(vec![1, 2, 3]).apply_producer(|| Ok("r")).expect("producer ok");
    assert_eq!(from_empty.into_context(), "r");
    assert_eq!(from_value.into_context(), "r");
}

#[test]
fn transform_receives_context_once_and_changes_type() {
    let calls = Cell::new(0);
    let chain = StepChain::with(String::from("abc")).apply_transform(|s: String| {
                                                        calls.set(calls.get() + 1);
                                                        assert_eq!(s, "abc");
                                                        Ok(s.len())
                                                    })
                                                    .expect("transform ok");
    assert_eq!(calls.get(), 1);
    let len: usize = chain.into_context();
    assert_eq!(len, 3);
}

#[test]
fn chain_without_steps_returns_initial_value() {
    assert_eq!(StepChain::with(7u64).into_context(), 7);
    assert_eq!(StepChain::new().into_context(), Empty);
}

#[test]
fn four_mixed_steps_observe_expected_intermediate_values() {
    let log: RefCell<Vec<String>> = RefCell::new(Vec::new());

    let result: Result<StepChain<f64>, StepError> = (|| {
        let chain = StepChain::with(2).apply_transform(|v: i32| {
                                          log.borrow_mut().push(format!("transform:{v}"));
                                          Ok(v * 10)
                                      })?
                                      .apply_consumer(|v: &i32| {
                                          log.borrow_mut().push(format!("consumer:{v}"));
                                          Ok(())
                                      })?
                                      .apply_action(|| {
                                          log.borrow_mut().push("action".to_string());
                                          Ok(())
                                      })?
                                      .apply_producer(|| {
                                          log.borrow_mut().push("producer".to_string());
                                          Ok(1.5)
                                      })?;
        Ok(chain)
    })();

    let chain = result.expect("all steps ok");
    assert_eq!(*log.borrow(), vec!["transform:2", "consumer:20", "action", "producer"]);
    assert_eq!(*chain.context(), 1.5);
}

#[test]
fn independent_chains_do_not_share_context() {
    let a = StepChain::with(1).apply_transform(|v: i32| Ok(v + 1)).expect("a");
    let b = StepChain::with(1).apply_transform(|v: i32| Ok(v * 100)).expect("b");
    assert_eq!((a.into_context(), b.into_context()), (2, 100));
}
