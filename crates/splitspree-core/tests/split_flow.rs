//! End-to-end flows: actions in, balances and transfers out.

use splitspree_core::{
    apply, compute_balances, settle, state_warnings, total_owed, user_summary, Action, Session,
};
use splitspree_domain::{AppState, DraftItem, ReceiptDraft, User};
use uuid::Uuid;

const EPS: f64 = 1e-6;

fn draft(store: &str, prices: &[(&str, f64)], tax: f64, tip: f64) -> ReceiptDraft {
    let items: Vec<DraftItem> = prices
        .iter()
        .map(|(name, price)| DraftItem {
            name: (*name).into(),
            price: *price,
            description: (*name).into(),
        })
        .collect();
    let subtotal: f64 = prices.iter().map(|(_, price)| price).sum();
    ReceiptDraft {
        store_name: store.into(),
        date: "2024-08-10".into(),
        items,
        subtotal,
        tax,
        tip,
        total: subtotal + tax + tip,
    }
}

fn add_user(session: &mut Session, name: &str) -> Uuid {
    let user = User::new(name);
    let id = user.id;
    session.dispatch(&Action::AddUser(user));
    id
}

/// Items of the session's single receipt, in line order.
fn receipt_line_items(session: &Session) -> Vec<Uuid> {
    let receipt = session.state().receipts.values().next().expect("receipt");
    receipt.item_ids.clone()
}

#[test]
fn grill_night_settles_with_one_transfer() {
    // One receipt, two $10 items, $2 tax, $22 total, paid by Alice.
    // Item 1 goes to Bob alone, item 2 is split between both.
    let mut session = Session::new();
    let alice = add_user(&mut session, "Alice");
    let bob = add_user(&mut session, "Bob");
    session.dispatch(&Action::AddReceipt {
        receipt_data: draft("Grill", &[("Burger", 10.0), ("Salad", 10.0)], 2.0, 0.0),
        payer_id: Some(alice),
    });
    let items = receipt_line_items(&session);
    session.dispatch(&Action::AssignItem {
        item_id: items[0],
        user_id: bob,
    });
    session.dispatch(&Action::SetItemAssignees {
        item_id: items[1],
        user_ids: vec![alice, bob],
    });

    let balances = compute_balances(session.state());
    assert!((balances[0].balance - 16.5).abs() < EPS);
    assert!((balances[1].balance + 16.5).abs() < EPS);

    let transfers = settle(&balances);
    assert_eq!(transfers.len(), 1);
    assert_eq!(transfers[0].from, bob);
    assert_eq!(transfers[0].to, alice);
    assert!((transfers[0].amount - 16.5).abs() < EPS);

    assert!(state_warnings(session.state()).is_empty());
}

#[test]
fn empty_session_produces_nothing() {
    let state = AppState::new();
    assert!(compute_balances(&state).is_empty());
    assert!(settle(&compute_balances(&state)).is_empty());
}

#[test]
fn price_edit_recomputes_from_live_prices() {
    let mut session = Session::new();
    let alice = add_user(&mut session, "Alice");
    let bob = add_user(&mut session, "Bob");
    session.dispatch(&Action::AddReceipt {
        receipt_data: draft("Deli", &[("Club", 10.0), ("Wrap", 10.0)], 2.0, 0.0),
        payer_id: Some(alice),
    });
    let items = receipt_line_items(&session);
    session.dispatch(&Action::AssignItem {
        item_id: items[0],
        user_id: bob,
    });
    session.dispatch(&Action::AssignItem {
        item_id: items[1],
        user_id: alice,
    });

    // 10% surcharge before the edit.
    assert!((total_owed(session.state(), alice) - 11.0).abs() < EPS);

    // The edit moves the live subtotal to 40, dropping the ratio to 5% for
    // every item on the receipt, including Alice's untouched wrap.
    session.dispatch(&Action::SetItemPrice {
        item_id: items[0],
        price: 30.0,
    });
    assert!((total_owed(session.state(), alice) - 10.5).abs() < EPS);
    assert!((total_owed(session.state(), bob) - 31.5).abs() < EPS);
}

#[test]
fn three_party_settlement_follows_user_order() {
    let mut session = Session::new();
    let a = add_user(&mut session, "Ana");
    let b = add_user(&mut session, "Ben");
    let c = add_user(&mut session, "Cam");
    // Cam fronts a 30-dollar no-surcharge bill; Ana eats 10, Ben eats 5,
    // Cam eats 15, leaving Ana owing 10, Ben owing 5, Cam owed 15.
    session.dispatch(&Action::AddReceipt {
        receipt_data: draft(
            "Noodle Bar",
            &[("Ramen", 10.0), ("Gyoza", 5.0), ("Donburi", 15.0)],
            0.0,
            0.0,
        ),
        payer_id: Some(c),
    });
    let items = receipt_line_items(&session);
    for (item_id, user_id) in items.iter().zip([a, b, c]) {
        session.dispatch(&Action::AssignItem {
            item_id: *item_id,
            user_id,
        });
    }

    let transfers = settle(&compute_balances(session.state()));
    assert_eq!(transfers.len(), 2);
    assert_eq!((transfers[0].from, transfers[0].to), (a, c));
    assert!((transfers[0].amount - 10.0).abs() < EPS);
    assert_eq!((transfers[1].from, transfers[1].to), (b, c));
    assert!((transfers[1].amount - 5.0).abs() < EPS);
}

#[test]
fn balances_conserve_money_across_many_receipts() {
    let mut session = Session::new();
    let alice = add_user(&mut session, "Alice");
    let bob = add_user(&mut session, "Bob");
    let carol = add_user(&mut session, "Carol");

    session.dispatch(&Action::AddReceipt {
        receipt_data: draft(
            "Market",
            &[("Cheese", 7.25), ("Bread", 3.1), ("Wine", 15.0)],
            2.03,
            0.0,
        ),
        payer_id: Some(alice),
    });
    session.dispatch(&Action::AddReceipt {
        receipt_data: draft("Taqueria", &[("Tacos", 12.0), ("Horchata", 4.0)], 1.28, 3.0),
        payer_id: Some(bob),
    });
    // Everyone shares everything.
    session.dispatch(&Action::AssignAllItems {
        user_ids: vec![alice, bob, carol],
    });

    let balances = compute_balances(session.state());
    let residue: f64 = balances.iter().map(|b| b.balance).sum();
    assert!(residue.abs() < EPS, "conservation violated: {residue}");

    // The transfers reconcile everyone to within a cent.
    let transfers = settle(&balances);
    for entry in &balances {
        let incoming: f64 = transfers
            .iter()
            .filter(|t| t.to == entry.user_id)
            .map(|t| t.amount)
            .sum();
        let outgoing: f64 = transfers
            .iter()
            .filter(|t| t.from == entry.user_id)
            .map(|t| t.amount)
            .sum();
        assert!((entry.balance - incoming + outgoing).abs() < 0.01);
    }
}

#[test]
fn unassigned_receipt_leaves_payer_fully_credited() {
    let mut session = Session::new();
    let alice = add_user(&mut session, "Alice");
    let _bob = add_user(&mut session, "Bob");
    session.dispatch(&Action::AddReceipt {
        receipt_data: draft("Kiosk", &[("Coffee", 3.5), ("Bagel", 2.5)], 0.48, 0.0),
        payer_id: Some(alice),
    });

    let balances = compute_balances(session.state());
    assert!((balances[0].balance - 6.48).abs() < EPS);
    assert_eq!(balances[1].balance, 0.0);
}

#[test]
fn summary_agrees_with_settlement_inputs() {
    let mut session = Session::new();
    let alice = add_user(&mut session, "Alice");
    let bob = add_user(&mut session, "Bob");
    session.dispatch(&Action::AddReceipt {
        receipt_data: draft("Cantina", &[("Nachos", 12.0), ("Burrito", 8.0)], 1.6, 2.4),
        payer_id: Some(bob),
    });
    let items = receipt_line_items(&session);
    session.dispatch(&Action::SetItemAssignees {
        item_id: items[0],
        user_ids: vec![alice, bob],
    });
    session.dispatch(&Action::AssignItem {
        item_id: items[1],
        user_id: alice,
    });

    let balances = compute_balances(session.state());
    for entry in &balances {
        let summary = user_summary(session.state(), entry.user_id).expect("user exists");
        assert!((summary.balance - entry.balance).abs() < EPS);
    }
}

#[test]
fn stale_assistant_action_leaves_state_intact() {
    let mut session = Session::new();
    let alice = add_user(&mut session, "Alice");
    session.dispatch(&Action::AddReceipt {
        receipt_data: draft("Cart", &[("Pretzel", 4.0)], 0.0, 0.0),
        payer_id: Some(alice),
    });
    let before = session.state().clone();

    // An assistant action referencing an id from a stale snapshot.
    session.dispatch(&Action::SetItemAssignees {
        item_id: Uuid::new_v4(),
        user_ids: vec![alice],
    });
    session.dispatch(&Action::SetReceiptPayer {
        receipt_id: Uuid::new_v4(),
        payer_id: None,
    });

    assert_eq!(session.state(), &before);
}

#[test]
fn reducer_is_pure_with_respect_to_its_input() {
    let mut state = AppState::new();
    let user = User::new("Dana");
    let user_id = user.id;
    state = apply(&state, &Action::AddUser(user));
    state = apply(
        &state,
        &Action::AddReceipt {
            receipt_data: draft("Stand", &[("Lemonade", 3.0)], 0.0, 0.0),
            payer_id: Some(user_id),
        },
    );

    let frozen = state.clone();
    let item_id = *state.items.keys().next().unwrap();
    let _next = apply(
        &state,
        &Action::AssignItem {
            item_id,
            user_id,
        },
    );
    assert_eq!(state, frozen);
}
