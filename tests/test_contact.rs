//! Integration tests for the contact form and footer content.
//!
//! Tests cover:
//! - Editing each contact field through the page
//! - Submitting leaves the form as typed
//! - Unmounting other sections does not touch the form
//! - The footer copyright line

mod common;

use folio::content::{self, PROFILE};
use folio::page::{ContactField, ContactForm};
use pretty_assertions::assert_eq;

use common::*;

#[test]
fn test_fields_start_empty() -> anyhow::Result<()> {
    let page = mounted_page();

    for field in ContactField::ALL {
        assert_eq!(page.contact().get(field), "", "{field:?}");
    }
    assert_eq!(page.contact(), &ContactForm::default());

    Ok(())
}

#[test]
fn test_edit_each_field() -> anyhow::Result<()> {
    let mut page = mounted_page();

    // 1. Fill every field
    page.set_contact_field(ContactField::Name, "Ada Lovelace".to_string());
    page.set_contact_field(ContactField::Email, "ada@example.com".to_string());
    page.set_contact_field(ContactField::Subject, "Engines".to_string());
    page.set_contact_field(ContactField::Message, "Let's talk numbers.".to_string());

    // 2. Each value lands in its own field
    let form = page.contact();
    assert_eq!(form.get(ContactField::Name), "Ada Lovelace");
    assert_eq!(form.get(ContactField::Email), "ada@example.com");
    assert_eq!(form.get(ContactField::Subject), "Engines");
    assert_eq!(form.get(ContactField::Message), "Let's talk numbers.");

    // 3. Editing again replaces the value
    page.set_contact_field(ContactField::Subject, String::new());
    assert_eq!(page.contact().get(ContactField::Subject), "");
    assert_eq!(page.contact().get(ContactField::Name), "Ada Lovelace");

    Ok(())
}

#[test]
fn test_submit_keeps_the_form() -> anyhow::Result<()> {
    let mut page = mounted_page();
    page.set_contact_field(ContactField::Name, "Ada".to_string());
    page.set_contact_field(ContactField::Message, "Hello".to_string());
    let before = page.contact().clone();

    // Nothing is sent and nothing is cleared
    page.submit_contact();
    page.submit_contact();
    assert_eq!(page.contact(), &before);

    Ok(())
}

#[test]
fn test_form_survives_unrelated_unmounts() -> anyhow::Result<()> {
    let mut page = mounted_page();
    page.set_contact_field(ContactField::Email, "ada@example.com".to_string());

    page.unmount(Section::Projects);
    page.unmount(Section::Navbar);
    assert_eq!(page.contact().get(ContactField::Email), "ada@example.com");

    Ok(())
}

#[test]
fn test_copyright_line() -> anyhow::Result<()> {
    assert_eq!(
        content::copyright(2025),
        format!("© 2025 {}. All rights reserved.", PROFILE.full_name())
    );
    assert_eq!(PROFILE.full_name(), "Ibrahim Sohofi");
    assert!(content::copyright(1999).contains("1999"));

    // The footer uses the current year
    let year = content::current_year();
    assert!(year >= 2024);
    assert!(content::copyright(year).starts_with(&format!("© {year} ")));

    Ok(())
}
