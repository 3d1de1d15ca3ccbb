//! Property-based tests for the state machine
//!
//! These tests verify key invariants hold across all possible inputs.

use super::*;
use proptest::prelude::*;

// ============================================================================
// Test Helpers
// ============================================================================

fn test_context() -> ConvContext {
    ConvContext::new("+15550001111")
}

/// Expected state after `n` messages from a fresh contact
fn expected_state(n: usize) -> ConvState {
    match n % 4 {
        0 => ConvState::Init,
        1 => ConvState::AwaitingProduct,
        2 => ConvState::AwaitingName,
        _ => ConvState::AwaitingReview,
    }
}

// ============================================================================
// Arbitrary Generators
// ============================================================================

fn arb_message() -> impl Strategy<Value = String> {
    "[ \t]{0,3}[a-zA-Z0-9!?.,' ]{0,40}[ \t\n]{0,3}"
}

fn arb_state() -> impl Strategy<Value = ConvState> {
    prop_oneof![
        Just(ConvState::Init),
        Just(ConvState::AwaitingProduct),
        Just(ConvState::AwaitingName),
        Just(ConvState::AwaitingReview),
    ]
}

/// A consistent session at the given state, with arbitrary captured fields
fn arb_session() -> impl Strategy<Value = Session> {
    (arb_state(), "[a-zA-Z ]{0,20}", "[a-zA-Z ]{0,20}").prop_map(|(state, product, name)| {
        let (product_name, user_name) = match state {
            ConvState::Init | ConvState::AwaitingProduct => (None, None),
            ConvState::AwaitingName => (Some(product), None),
            ConvState::AwaitingReview => (Some(product), Some(name)),
        };
        Session {
            state,
            product_name,
            user_name,
            review_text: None,
        }
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    // Invariant 1: one step along the chain per message, completing every fourth
    #[test]
    fn prop_linear_progression(messages in proptest::collection::vec(arb_message(), 0..20)) {
        let ctx = test_context();
        let mut session = Session::new();

        for (i, message) in messages.iter().enumerate() {
            prop_assert_eq!(session.state, expected_state(i));
            let result = advance(&session, &ctx, message);
            match result.new_session.clone() {
                Some(next) => {
                    prop_assert_eq!(next.state, expected_state(i + 1));
                    prop_assert!(next.is_consistent(), "Inconsistent session: {:?}", next);
                    session = next;
                }
                None => {
                    prop_assert_eq!(session.state, ConvState::AwaitingReview);
                    prop_assert!(result.completed_review().is_some());
                    session = Session::new();
                }
            }
        }
    }

    // Invariant 2: captured fields equal the trimmed 2nd, 3rd and 4th messages
    #[test]
    fn prop_field_capture_fidelity(
        greeting in arb_message(),
        product in arb_message(),
        name in arb_message(),
        review in arb_message(),
    ) {
        let ctx = test_context();
        let mut session = Session::new();
        for message in [&greeting, &product, &name] {
            session = advance(&session, &ctx, message).new_session.unwrap();
        }
        let result = advance(&session, &ctx, &review);

        let completed = result.completed_review().cloned().unwrap();
        prop_assert_eq!(completed.contact_number, ctx.contact_number);
        prop_assert_eq!(completed.product_name, product.trim());
        prop_assert_eq!(completed.user_name, name.trim());
        prop_assert_eq!(completed.review_text, review.trim());
    }

    // Invariant 3: only the completing transition emits a review, and only it clears
    #[test]
    fn prop_effects_match_outcome(session in arb_session(), message in arb_message()) {
        let result = advance(&session, &test_context(), &message);

        if session.state == ConvState::AwaitingReview {
            prop_assert!(result.is_complete());
            prop_assert!(result.completed_review().is_some());
            prop_assert_eq!(result.effects.last(), Some(&Effect::ClearSession));
            prop_assert!(!result.effects.contains(&Effect::SaveSession));
        } else {
            prop_assert!(!result.is_complete());
            prop_assert!(result.completed_review().is_none());
            prop_assert_eq!(result.effects, vec![Effect::SaveSession]);
        }
    }

    // Invariant 4: transitions are pure
    #[test]
    fn prop_transition_is_deterministic(session in arb_session(), message in arb_message()) {
        let ctx = test_context();
        let first = advance(&session, &ctx, &message);
        let second = advance(&session, &ctx, &message);
        prop_assert_eq!(first, second);
    }

    // Invariant 5: consistent sessions stay consistent
    #[test]
    fn prop_consistency_preserved(session in arb_session(), message in arb_message()) {
        let result = advance(&session, &test_context(), &message);
        if let Some(next) = result.new_session {
            prop_assert!(next.is_consistent(), "Inconsistent session: {:?}", next);
        }
    }
}
