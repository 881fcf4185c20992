// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use breatheclean::partners::{PartnerBook, validate_email};
use breatheclean::{Error, cli, commands, session::Session};

#[test]
fn invite_records_pending_partner() {
    let mut book = PartnerBook::new();
    let inv = book.invite("  Sam ", " sam@example.com ").unwrap();
    assert_eq!(inv.name, "Sam");
    assert_eq!(inv.email, "sam@example.com");
    assert_eq!(book.invitations().len(), 1);
}

#[test]
fn invite_requires_name_and_valid_email() {
    let mut book = PartnerBook::new();
    assert_eq!(
        book.invite("", "a@b.co").unwrap_err(),
        Error::MissingField("name")
    );
    assert_eq!(
        book.invite("Sam", "  ").unwrap_err(),
        Error::MissingField("email")
    );
    assert!(matches!(
        book.invite("Sam", "not-an-email"),
        Err(Error::InvalidEmail(_))
    ));
    assert!(book.invitations().is_empty());
}

#[test]
fn email_shapes() {
    assert!(validate_email("first.last@uni.edu").is_ok());
    assert!(validate_email("a@b").is_err());
    assert!(validate_email("a b@c.d").is_err());
}

#[test]
fn partner_invite_command() {
    let mut session = Session::default();
    let matches = cli::build_cli().get_matches_from([
        "breatheclean",
        "partner",
        "invite",
        "--name",
        "Alex",
        "--email",
        "alex@example.org",
    ]);
    commands::dispatch(&mut session, &matches).unwrap();
    assert_eq!(session.partners.invitations()[0].name, "Alex");
}

#[test]
fn invite_returns_the_newest_invitation() {
    let mut book = PartnerBook::new();
    book.invite("Sam", "sam@example.com").unwrap();
    let second = book.invite("Kai", "kai@example.com").unwrap().clone();
    assert_eq!(second.name, "Kai");
    assert_eq!(book.invitations()[1], second);
    assert!(validate_email("kai@example.com").is_ok());
    assert!(validate_email("@example.com").is_err());
}
