/// Listing fields shared by `camps` and `upcomingCamp` documents.
pub const CAMP_FIELDS: [&str; 9] = [
    "audience",
    "camp_name",
    "description",
    "fee",
    "image",
    "professional",
    "schedule",
    "service",
    "venue",
];

/// Status flags written by the payment, confirmation and proposal workflow routes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusFlag {
    Payment,
    Confirm,
    ParticipantsAccepted,
    ProfessionalsAccepted,
    Publish,
}

impl StatusFlag {
    pub fn field(&self) -> &'static str {
        match self {
            StatusFlag::Payment => "payment",
            StatusFlag::Confirm => "confirm",
            StatusFlag::ParticipantsAccepted => "participants",
            StatusFlag::ProfessionalsAccepted => "professionals",
            StatusFlag::Publish => "publish",
        }
    }

    pub fn value(&self) -> &'static str {
        match self {
            StatusFlag::ParticipantsAccepted | StatusFlag::ProfessionalsAccepted => "accepted",
            StatusFlag::Payment | StatusFlag::Confirm | StatusFlag::Publish => "done",
        }
    }
}
