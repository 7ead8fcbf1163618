//! Admin-set reconciliation for institutions, schools, departments and clubs.
//!
//! Each admin-bearing record has role fields (chancellor, head, creator, ...) whose
//! holders are always admins. These functions compute the admin set a record should
//! have after a create or update; persisting the result is left to the repository.

use std::collections::BTreeSet;

/// Record whose admins set is being read or changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdminScope {
    Institution(i32),
    School(i32),
    Department(i32),
    ClubSociety(i32),
}

impl AdminScope {
    /// Human readable level used in permission messages.
    pub fn level(&self) -> &'static str {
        match self {
            Self::Institution(_) => "institution",
            Self::School(_) => "school",
            Self::Department(_) => "department",
            Self::ClubSociety(_) => "club",
        }
    }
}

/// A role field that grants admin status, before and after an update.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RoleChange {
    pub previous: Option<i32>,
    pub next: Option<i32>,
}

impl RoleChange {
    /// Builds a change from the stored holder and a patch value.
    ///
    /// `requested` is `None` when the field was absent from the patch, `Some(None)` when
    /// it was cleared.
    pub fn new(previous: Option<i32>, requested: Option<Option<i32>>) -> Self {
        Self {
            previous,
            next: requested.unwrap_or(previous),
        }
    }

    /// A role that the update does not touch.
    pub fn unchanged(holder: Option<i32>) -> Self {
        Self {
            previous: holder,
            next: holder,
        }
    }

    pub fn is_changed(&self) -> bool {
        self.previous != self.next
    }
}

/// Users to insert into and delete from an admins junction.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AdminDiff {
    pub added: BTreeSet<i32>,
    pub removed: BTreeSet<i32>,
}

impl AdminDiff {
    pub fn between(current: &BTreeSet<i32>, next: &BTreeSet<i32>) -> Self {
        Self {
            added: next.difference(current).copied().collect(),
            removed: current.difference(next).copied().collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.added.is_empty() && self.removed.is_empty()
    }
}

/// Union of two admin sets.
pub fn merge_admins(existing: &BTreeSet<i32>, new: &BTreeSet<i32>) -> BTreeSet<i32> {
    existing.union(new).copied().collect()
}

/// Admins of a freshly created record: the provided admins plus every role holder.
pub fn initial_admins(role_holders: &[Option<i32>], provided: &BTreeSet<i32>) -> BTreeSet<i32> {
    let holders: BTreeSet<i32> = role_holders.iter().flatten().copied().collect();

    merge_admins(provided, &holders)
}

/// Computes the admin set after an update.
///
/// Removals of users who hold a role before the update are ignored. The reduced set is
/// merged with `add`, then each changed role swaps its old holder for the new one. An old
/// holder keeps admin status while they still hold another role after the update.
pub fn reconcile_admins(
    current: &BTreeSet<i32>,
    roles: &[RoleChange],
    add: &BTreeSet<i32>,
    remove: &BTreeSet<i32>,
) -> BTreeSet<i32> {
    let protected: BTreeSet<i32> = roles.iter().filter_map(|role| role.previous).collect();
    let holders: BTreeSet<i32> = roles.iter().filter_map(|role| role.next).collect();

    let removable: BTreeSet<i32> = remove.difference(&protected).copied().collect();
    let reduced: BTreeSet<i32> = current.difference(&removable).copied().collect();

    let mut admins = merge_admins(&reduced, add);

    for role in roles.iter().filter(|role| role.is_changed()) {
        if let Some(old) = role.previous {
            if !holders.contains(&old) {
                admins.remove(&old);
            }
        }
        if let Some(new) = role.next {
            admins.insert(new);
        }
    }

    admins
}

/// Computes club membership after an update.
///
/// Admins are always members, so removing a member who is (still) an admin is ignored.
pub fn reconcile_members(
    current: &BTreeSet<i32>,
    add: &BTreeSet<i32>,
    remove: &BTreeSet<i32>,
    admins: &BTreeSet<i32>,
) -> BTreeSet<i32> {
    let removable: BTreeSet<i32> = remove.difference(admins).copied().collect();
    let reduced: BTreeSet<i32> = current.difference(&removable).copied().collect();

    merge_admins(&merge_admins(&reduced, add), admins)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(ids: &[i32]) -> BTreeSet<i32> {
        ids.iter().copied().collect()
    }

    #[test]
    fn merge_is_commutative_and_deduplicating() {
        let a = set(&[1, 2, 3]);
        let b = set(&[3, 4]);

        assert_eq!(merge_admins(&a, &b), merge_admins(&b, &a));
        assert_eq!(merge_admins(&a, &b), set(&[1, 2, 3, 4]));
        assert_eq!(merge_admins(&a, &a), a);
    }

    #[test]
    fn initial_admins_include_role_holders() {
        let admins = initial_admins(&[Some(10), Some(11), Some(12)], &set(&[20]));

        assert_eq!(admins, set(&[10, 11, 12, 20]));
    }

    #[test]
    fn initial_admins_skip_empty_roles() {
        let admins = initial_admins(&[None, Some(5), None], &BTreeSet::new());

        assert_eq!(admins, set(&[5]));
    }

    #[test]
    fn removing_role_holder_is_ignored() {
        let current = set(&[1, 2, 3]);
        let roles = [RoleChange::unchanged(Some(1)), RoleChange::unchanged(None)];

        let admins = reconcile_admins(&current, &roles, &BTreeSet::new(), &set(&[1, 3]));

        assert_eq!(admins, set(&[1, 2]));
    }

    #[test]
    fn additions_are_merged() {
        let current = set(&[1]);
        let roles = [RoleChange::unchanged(Some(1))];

        let admins = reconcile_admins(&current, &roles, &set(&[1, 4, 5]), &BTreeSet::new());

        assert_eq!(admins, set(&[1, 4, 5]));
    }

    #[test]
    fn changing_role_swaps_holders() {
        let current = set(&[1, 9]);
        let roles = [RoleChange::new(Some(1), Some(Some(2))), RoleChange::unchanged(Some(9))];

        let admins = reconcile_admins(&current, &roles, &BTreeSet::new(), &BTreeSet::new());

        assert_eq!(admins, set(&[2, 9]));
    }

    #[test]
    fn changing_role_twice_is_idempotent() {
        let current = set(&[1, 9]);
        let first = [RoleChange::new(Some(1), Some(Some(2))), RoleChange::unchanged(Some(9))];
        let after_first = reconcile_admins(&current, &first, &BTreeSet::new(), &BTreeSet::new());

        let second = [RoleChange::new(Some(2), Some(Some(2))), RoleChange::unchanged(Some(9))];
        let after_second =
            reconcile_admins(&after_first, &second, &BTreeSet::new(), &BTreeSet::new());

        assert_eq!(after_first, after_second);
    }

    #[test]
    fn clearing_role_removes_old_holder() {
        let current = set(&[1, 9]);
        let roles = [RoleChange::new(Some(1), Some(None)), RoleChange::unchanged(Some(9))];

        let admins = reconcile_admins(&current, &roles, &BTreeSet::new(), &BTreeSet::new());

        assert_eq!(admins, set(&[9]));
    }

    #[test]
    fn old_holder_with_another_role_stays_admin() {
        // User 1 is both head and creator; only the head changes.
        let current = set(&[1]);
        let roles = [RoleChange::new(Some(1), Some(Some(2))), RoleChange::unchanged(Some(1))];

        let admins = reconcile_admins(&current, &roles, &BTreeSet::new(), &BTreeSet::new());

        assert_eq!(admins, set(&[1, 2]));
    }

    #[test]
    fn old_holder_can_be_removed_in_same_request() {
        let current = set(&[1, 9]);
        let roles = [RoleChange::new(Some(1), Some(Some(2)))];

        let admins = reconcile_admins(&current, &roles, &BTreeSet::new(), &set(&[1]));

        assert!(!admins.contains(&1));
        assert!(admins.contains(&2));
    }

    #[test]
    fn members_always_include_admins() {
        let members = reconcile_members(&set(&[1, 2, 3]), &set(&[4]), &set(&[1, 2]), &set(&[1, 5]));

        assert_eq!(members, set(&[1, 3, 4, 5]));
    }

    #[test]
    fn diff_reports_added_and_removed() {
        let diff = AdminDiff::between(&set(&[1, 2]), &set(&[2, 3]));

        assert_eq!(diff.added, set(&[3]));
        assert_eq!(diff.removed, set(&[1]));
        assert!(AdminDiff::between(&set(&[1]), &set(&[1])).is_empty());
    }
}
