//! Collaborator affiliation partitioning.
//!
//! Listing a repository's collaborators with `affiliation=direct` also
//! returns users who were added as outside collaborators, so writing the two
//! listings to their respective output files as-is would emit every outside
//! collaborator twice. The partition below is what makes the two files
//! disjoint.

use std::collections::HashSet;

use crate::github::types::Collaborator;

/// Split a repository's collaborators into disjoint affiliation classes.
///
/// Input is the `outside` listing and the `direct` listing as reported by
/// the API. Returns `(external, direct_only)` where `direct_only` is the
/// direct listing minus every login present in the outside listing. Matching
/// is an exact, case-sensitive comparison of the canonical login; order
/// within each listing is preserved.
pub fn partition(
    outside: Vec<Collaborator>,
    direct: Vec<Collaborator>,
) -> (Vec<Collaborator>, Vec<Collaborator>) {
    let external_logins: HashSet<&str> = outside.iter().map(|c| c.login.as_str()).collect();

    let direct_only = direct
        .into_iter()
        .filter(|c| !external_logins.contains(c.login.as_str()))
        .collect();

    (outside, direct_only)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::permission::PermissionRecord;

    fn collaborator(login: &str) -> Collaborator {
        Collaborator {
            login: login.to_string(),
            permissions: PermissionRecord {
                push: true,
                ..Default::default()
            },
        }
    }

    fn logins(collaborators: &[Collaborator]) -> Vec<&str> {
        collaborators.iter().map(|c| c.login.as_str()).collect()
    }

    #[test]
    fn outside_logins_are_removed_from_direct() {
        let outside = vec![collaborator("alice"), collaborator("bob")];
        let direct = vec![
            collaborator("alice"),
            collaborator("carol"),
            collaborator("bob"),
            collaborator("dave"),
        ];

        let (external, direct_only) = partition(outside, direct);

        assert_eq!(logins(&external), ["alice", "bob"]);
        assert_eq!(logins(&direct_only), ["carol", "dave"]);
    }

    #[test]
    fn partitioned_sets_are_disjoint() {
        let outside = vec![collaborator("alice")];
        let direct = vec![collaborator("alice"), collaborator("bob")];

        let (external, direct_only) = partition(outside, direct);

        let external_set: HashSet<_> = logins(&external).into_iter().collect();
        assert!(
            direct_only
                .iter()
                .all(|c| !external_set.contains(c.login.as_str()))
        );
    }

    #[test]
    fn union_recovers_the_original_direct_listing() {
        let outside = vec![collaborator("alice"), collaborator("eve")];
        let direct = vec![
            collaborator("alice"),
            collaborator("bob"),
            collaborator("carol"),
        ];
        let original_direct = logins(&direct)
            .into_iter()
            .map(String::from)
            .collect::<Vec<_>>();

        let (external, direct_only) = partition(outside, direct);

        // direct-only plus the overlap with the external set gives back the
        // direct listing exactly.
        let external_set: HashSet<_> = logins(&external).into_iter().collect();
        let recovered: Vec<_> = original_direct
            .iter()
            .filter(|l| {
                direct_only.iter().any(|c| &c.login == *l) || external_set.contains(l.as_str())
            })
            .cloned()
            .collect();
        assert_eq!(recovered, original_direct);
    }

    #[test]
    fn matching_is_case_sensitive() {
        let outside = vec![collaborator("Alice")];
        let direct = vec![collaborator("alice"), collaborator("Alice")];

        let (_, direct_only) = partition(outside, direct);

        assert_eq!(logins(&direct_only), ["alice"]);
    }

    #[test]
    fn empty_outside_listing_passes_direct_through() {
        let direct = vec![collaborator("bob"), collaborator("carol")];
        let (external, direct_only) = partition(Vec::new(), direct);

        assert!(external.is_empty());
        assert_eq!(logins(&direct_only), ["bob", "carol"]);
    }
}
