//! Member registration, directory lookups and caller resolution.

use mediaroster_core::auth::{MemberRole, NewMember};
use mediaroster_core::desk::ScheduleDesk;
use mediaroster_core::error::RosterError;

fn desk() -> ScheduleDesk {
    ScheduleDesk::build_test().unwrap()
}

fn applicant(username: &str, email: &str, role: MemberRole, team: &str) -> NewMember {
    NewMember {
        username: username.to_string(),
        email: email.to_string(),
        name: format!("Name {username}"),
        role,
        team: team.to_string(),
    }
}

/// Usernames and emails are trimmed and lowercased before storage.
#[test]
fn registration_normalizes_identity() {
    let desk = desk();
    let member = desk
        .register_member(applicant(
            "  GraceK ",
            "Grace@Example.COM",
            MemberRole::TeamLeader,
            "Photo Team",
        ))
        .unwrap();

    assert_eq!(member.username, "gracek");
    assert_eq!(member.email, "grace@example.com");
    assert!(member.active, "new accounts start active");
    assert_eq!(member.member_id.len(), 36, "ids are uuid strings");
}

/// A username or email already registered is refused, case-insensitively.
#[test]
fn duplicate_identities_are_refused() {
    let desk = desk();
    desk.register_member(applicant(
        "gracek",
        "grace@example.com",
        MemberRole::TeamLeader,
        "Photo Team",
    ))
    .unwrap();

    let taken = desk.register_member(applicant(
        "GRACEK",
        "other@example.com",
        MemberRole::TeamMember,
        "Photo Team",
    ));
    assert!(
        matches!(taken, Err(RosterError::InvalidField { field: "username", .. })),
        "duplicate username: {taken:?}"
    );

    let taken = desk.register_member(applicant(
        "someoneelse",
        "GRACE@example.com",
        MemberRole::TeamMember,
        "Photo Team",
    ));
    assert!(
        matches!(taken, Err(RosterError::InvalidField { field: "email", .. })),
        "duplicate email: {taken:?}"
    );
}

/// Field validation: short usernames, bad emails, blank names and
/// unknown teams never reach the store.
#[test]
fn invalid_applications_are_refused() {
    let desk = desk();

    let result = desk.register_member(applicant(
        "ab",
        "ab@example.com",
        MemberRole::TeamMember,
        "Photo Team",
    ));
    assert!(matches!(
        result,
        Err(RosterError::InvalidField { field: "username", .. })
    ));

    // Two characters stay two characters even when they take four bytes.
    let result = desk.register_member(applicant(
        "ñü",
        "nu@example.com",
        MemberRole::TeamMember,
        "Photo Team",
    ));
    assert!(
        matches!(result, Err(RosterError::InvalidField { field: "username", .. })),
        "multibyte two-char username: {result:?}"
    );

    let result = desk.register_member(applicant(
        "nomail",
        "nowhere",
        MemberRole::TeamMember,
        "Photo Team",
    ));
    assert!(matches!(
        result,
        Err(RosterError::InvalidField { field: "email", .. })
    ));

    let mut blank_name = applicant("noname", "noname@example.com", MemberRole::TeamMember, "Photo Team");
    blank_name.name = "   ".to_string();
    let result = desk.register_member(blank_name);
    assert!(matches!(
        result,
        Err(RosterError::InvalidField { field: "name", .. })
    ));

    let result = desk.register_member(applicant(
        "choirist",
        "choir@example.com",
        MemberRole::TeamMember,
        "Bell Choir",
    ));
    assert!(
        matches!(result, Err(RosterError::UnknownTeam(ref team)) if team == "Bell Choir"),
        "unknown team: {result:?}"
    );
}

/// The assignee picker lists active members of the team only; leaders
/// and deactivated accounts stay out.
#[test]
fn team_members_lists_active_members_only() {
    let desk = desk();
    desk.register_member(applicant("lead1", "lead1@example.com", MemberRole::TeamLeader, "Photo Team"))
        .unwrap();
    desk.register_member(applicant("mem1", "mem1@example.com", MemberRole::TeamMember, "Photo Team"))
        .unwrap();
    let benched = desk
        .register_member(applicant("mem2", "mem2@example.com", MemberRole::TeamMember, "Photo Team"))
        .unwrap();
    desk.register_member(applicant("mem3", "mem3@example.com", MemberRole::TeamMember, "Video Team"))
        .unwrap();

    desk.store.set_member_active(&benched.member_id, false).unwrap();

    let members = desk.team_members("Photo Team").unwrap();
    let usernames: Vec<&str> = members.iter().map(|m| m.username.as_str()).collect();
    assert_eq!(usernames, ["mem1"]);

    assert!(matches!(
        desk.team_members("Bell Choir"),
        Err(RosterError::UnknownTeam(_))
    ));
}

/// caller_for resolves a directory entry into a policy identity and
/// refuses deactivated accounts.
#[test]
fn caller_resolution_follows_the_directory() {
    let desk = desk();
    let member = desk
        .register_member(applicant("gracek", "grace@example.com", MemberRole::TeamLeader, "Photo Team"))
        .unwrap();

    let caller = desk.caller_for(" GraceK ").unwrap();
    assert!(caller.is_leader());
    assert_eq!(caller.team, "Photo Team");
    assert_eq!(caller.name, "Name gracek");

    let missing = desk.caller_for("nobody");
    assert!(
        matches!(missing, Err(RosterError::InvalidField { field: "username", .. })),
        "unknown caller: {missing:?}"
    );

    desk.store.set_member_active(&member.member_id, false).unwrap();
    let benched = desk.caller_for("gracek");
    assert!(
        matches!(benched, Err(RosterError::AccessDenied(_))),
        "deactivated caller: {benched:?}"
    );
}
