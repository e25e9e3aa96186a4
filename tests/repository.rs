use pushkind_leads::domain::lead::{NewLead, Product, UpdateLead};
use pushkind_leads::domain::types::{LeadEmail, LeadId, LeadName, LeadPhone};
use pushkind_leads::repository::errors::RepositoryError;
use pushkind_leads::repository::{DieselRepository, LeadReader, LeadWriter};

mod common;

fn new_lead(name: &str, email: &str, products: &[&str]) -> NewLead {
    NewLead::new(
        LeadName::new(name).unwrap(),
        LeadEmail::new(email).unwrap(),
        LeadPhone::new("555-0100").unwrap(),
        products.iter().map(|p| Product::new(*p)).collect(),
    )
}

fn update_for(name: &str, email: &str, products: Option<&[&str]>) -> UpdateLead {
    UpdateLead::new(
        LeadName::new(name).unwrap(),
        LeadEmail::new(email).unwrap(),
        LeadPhone::new("555-0199").unwrap(),
        products.map(|items| items.iter().map(|p| Product::new(*p)).collect()),
    )
}

#[test]
fn test_lead_repository_crud() {
    let test_db = common::TestDb::new("test_lead_repository_crud.db");
    let repo = DieselRepository::new(test_db.pool().clone());

    let alice = repo
        .create_lead(&new_lead("Alice", "alice@example.com", &["Widget", "Gadget"]))
        .unwrap();
    let bob = repo
        .create_lead(&new_lead("Bob", "bob@example.com", &[]))
        .unwrap();

    assert_eq!(alice.name.as_str(), "Alice");
    assert_eq!(alice.created_at, alice.updated_at);
    assert_eq!(
        alice.products,
        vec![Product::new("Widget"), Product::new("Gadget")]
    );
    assert!(bob.products.is_empty());

    let listed = repo.list_leads().unwrap();
    assert_eq!(listed.len(), 2);
    assert_eq!(listed[0].id, alice.id);
    assert_eq!(listed[1].id, bob.id);

    let fetched = repo.get_lead_by_id(alice.id).unwrap().unwrap();
    assert_eq!(fetched, alice);

    let updated = repo
        .update_lead(
            bob.id,
            &update_for("Bobby", "bobby@example.com", Some(&["Gizmo"])),
        )
        .unwrap();
    assert_eq!(updated.id, bob.id);
    assert_eq!(updated.name.as_str(), "Bobby");
    assert_eq!(updated.phone.as_str(), "555-0199");
    assert_eq!(updated.products, vec![Product::new("Gizmo")]);
    assert_eq!(updated.created_at, bob.created_at);
    assert!(updated.updated_at >= bob.updated_at);

    repo.delete_lead(alice.id).unwrap();
    assert!(repo.get_lead_by_id(alice.id).unwrap().is_none());
    assert_eq!(repo.list_leads().unwrap().len(), 1);
}

#[test]
fn test_update_without_products_keeps_stored_list() {
    let test_db = common::TestDb::new("test_update_without_products_keeps_stored_list.db");
    let repo = DieselRepository::new(test_db.pool().clone());

    let lead = repo
        .create_lead(&new_lead("Carol", "carol@example.com", &["A", "B", "C"]))
        .unwrap();

    let kept = repo
        .update_lead(lead.id, &update_for("Carol", "carol@example.com", None))
        .unwrap();
    assert_eq!(kept.products, lead.products);

    let cleared = repo
        .update_lead(lead.id, &update_for("Carol", "carol@example.com", Some(&[])))
        .unwrap();
    assert!(cleared.products.is_empty());
}

#[test]
fn test_duplicate_email_is_a_constraint_violation() {
    let test_db = common::TestDb::new("test_duplicate_email_is_a_constraint_violation.db");
    let repo = DieselRepository::new(test_db.pool().clone());

    repo.create_lead(&new_lead("Dan", "dan@example.com", &[]))
        .unwrap();
    let err = repo
        .create_lead(&new_lead("Danny", "dan@example.com", &["Widget"]))
        .unwrap_err();
    assert!(matches!(err, RepositoryError::ConstraintViolation(_)));

    // The failed insert must not leave products or a partial row behind.
    assert_eq!(repo.list_leads().unwrap().len(), 1);

    let other = repo
        .create_lead(&new_lead("Eve", "eve@example.com", &[]))
        .unwrap();
    let err = repo
        .update_lead(other.id, &update_for("Eve", "dan@example.com", None))
        .unwrap_err();
    assert!(matches!(err, RepositoryError::ConstraintViolation(_)));
}

#[test]
fn test_unknown_id_is_not_found() {
    let test_db = common::TestDb::new("test_unknown_id_is_not_found.db");
    let repo = DieselRepository::new(test_db.pool().clone());
    let missing = LeadId::new();

    assert!(repo.get_lead_by_id(missing).unwrap().is_none());
    assert!(matches!(
        repo.update_lead(missing, &update_for("Nobody", "nobody@example.com", None)),
        Err(RepositoryError::NotFound)
    ));
    assert!(matches!(
        repo.delete_lead(missing),
        Err(RepositoryError::NotFound)
    ));
}

#[test]
fn test_delete_twice_reports_not_found() {
    let test_db = common::TestDb::new("test_delete_twice_reports_not_found.db");
    let repo = DieselRepository::new(test_db.pool().clone());

    let lead = repo
        .create_lead(&new_lead("Frank", "frank@example.com", &["Widget"]))
        .unwrap();
    repo.delete_lead(lead.id).unwrap();
    assert!(matches!(
        repo.delete_lead(lead.id),
        Err(RepositoryError::NotFound)
    ));

    // The email is free again once the lead is gone.
    repo.create_lead(&new_lead("Frank", "frank@example.com", &[]))
        .unwrap();
}
