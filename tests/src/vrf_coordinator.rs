use cosmwasm_std::Addr;
use cw_controllers::AdminError;
use pretty_assertions::assert_eq;

use raffle_msg::raffle::RoundState;
use vrf_coordinator_mocks::error::ContractError;

use crate::suite::{SuiteBuilder, ADMIN, ALICE, ATTACKER, BOB, ORACLE};

#[test]
fn subscription_lifecycle() {
    let mut suite = SuiteBuilder::new().build();

    let subscription = suite.query_subscription(suite.subscription_id()).unwrap();
    assert_eq!(subscription.owner, Addr::unchecked(ADMIN));
    assert_eq!(subscription.consumers, vec![Addr::unchecked(suite.raffle())]);

    let subscription_id = suite.create_subscription(ALICE).unwrap();
    assert_eq!(subscription_id, suite.subscription_id() + 1);

    suite.add_consumer(ALICE, subscription_id, BOB).unwrap();
    // registering twice keeps a single entry
    suite.add_consumer(ALICE, subscription_id, BOB).unwrap();
    assert_eq!(
        suite.query_subscription(subscription_id).unwrap().consumers,
        vec![Addr::unchecked(BOB)]
    );

    let err = suite
        .add_consumer(ATTACKER, subscription_id, ATTACKER)
        .unwrap_err();
    assert_eq!(ContractError::MustBeSubOwner, err.downcast().unwrap());

    suite.remove_consumer(ALICE, subscription_id, BOB).unwrap();
    let err = suite
        .remove_consumer(ALICE, subscription_id, BOB)
        .unwrap_err();
    assert_eq!(
        ContractError::InvalidConsumer {
            subscription_id,
            consumer: BOB.to_string(),
        },
        err.downcast().unwrap()
    );

    let err = suite.add_consumer(ALICE, 42, BOB).unwrap_err();
    assert_eq!(
        ContractError::InvalidSubscription {
            subscription_id: 42
        },
        err.downcast().unwrap()
    );
}

#[test]
fn request_validation() {
    let mut suite = SuiteBuilder::new().build();
    let subscription_id = suite.create_subscription(ADMIN).unwrap();

    let err = suite
        .request_random_words(ALICE, subscription_id, 3, 1)
        .unwrap_err();
    assert_eq!(
        ContractError::InvalidConsumer {
            subscription_id,
            consumer: ALICE.to_string(),
        },
        err.downcast().unwrap()
    );

    suite.add_consumer(ADMIN, subscription_id, ALICE).unwrap();

    let err = suite
        .request_random_words(ALICE, subscription_id, 2, 1)
        .unwrap_err();
    assert_eq!(
        ContractError::InvalidRequestConfirmations { have: 2, want: 3 },
        err.downcast().unwrap()
    );

    let err = suite
        .request_random_words(ALICE, subscription_id, 3, 0)
        .unwrap_err();
    assert_eq!(ContractError::ZeroNumWords, err.downcast().unwrap());

    let err = suite
        .request_random_words(ALICE, subscription_id, 3, 501)
        .unwrap_err();
    assert_eq!(
        ContractError::NumWordsTooBig {
            have: 501,
            want: 500
        },
        err.downcast().unwrap()
    );

    suite
        .request_random_words(ALICE, subscription_id, 5, 2)
        .unwrap();
    let request = suite.query_request(1).unwrap().unwrap();
    assert_eq!(request.consumer, Addr::unchecked(ALICE));
    assert_eq!(request.request_confirmations, 5);
    assert_eq!(request.num_words, 2);
    assert_eq!(request.requested_at_height, suite.get_height());
}

#[test]
fn fulfill_waits_for_confirmations() {
    let mut suite = SuiteBuilder::new().build();
    suite.enter_with_fee(ALICE).unwrap();
    suite.update_time(61);
    suite.perform_upkeep(ATTACKER).unwrap();
    let ready_at = suite.get_height() + 3;

    suite.next_blocks(2);
    let err = suite.fulfill_random_words(ORACLE, 1, &[1]).unwrap_err();
    assert_eq!(
        ContractError::ConfirmationsPending {
            request_id: 1,
            ready_at,
        },
        err.downcast().unwrap()
    );

    suite.next_blocks(1);
    let err = suite.fulfill_random_words(ORACLE, 1, &[1, 2]).unwrap_err();
    assert_eq!(
        ContractError::WrongWordCount { have: 2, want: 1 },
        err.downcast().unwrap()
    );

    let err = suite.fulfill_random_words(ORACLE, 2, &[1]).unwrap_err();
    assert_eq!(
        ContractError::NonexistentRequest { request_id: 2 },
        err.downcast().unwrap()
    );

    // nothing was delivered yet
    assert_eq!(suite.query_round_state().unwrap(), RoundState::Resolving);
    assert!(suite.query_request(1).unwrap().is_some());

    suite.fulfill_random_words(ORACLE, 1, &[1]).unwrap();
    assert_eq!(suite.query_round_state().unwrap(), RoundState::Open);
}

#[test]
fn only_operator_fulfills() {
    let mut suite = SuiteBuilder::new().build();
    suite.enter_with_fee(ALICE).unwrap();
    suite.update_time(61);
    suite.perform_upkeep(ATTACKER).unwrap();
    suite.next_blocks(3);

    let err = suite.fulfill_random_words(ATTACKER, 1, &[1]).unwrap_err();
    assert_eq!(
        ContractError::Admin(AdminError::NotAdmin {}),
        err.downcast().unwrap()
    );

    let err = suite.update_operator(ATTACKER, ATTACKER).unwrap_err();
    assert_eq!(
        ContractError::Admin(AdminError::NotAdmin {}),
        err.downcast().unwrap()
    );

    suite.update_operator(ORACLE, BOB).unwrap();
    assert_eq!(suite.query_operator().unwrap(), Some(Addr::unchecked(BOB)));

    suite.fulfill_random_words(BOB, 1, &[1]).unwrap();
    assert_eq!(
        suite.query_recent_winner().unwrap(),
        Some(Addr::unchecked(ALICE))
    );
}
