/// Whether `max_participants` caps signups.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CapacityPolicy {
    /// Capacity is informational only.
    #[default]
    Advisory,
    Enforced,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActivityChange {
    Enroll {
        email: String,
        capacity: CapacityPolicy,
    },
    Withdraw {
        email: String,
    },
}
