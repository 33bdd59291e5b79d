//! Wizard steps and the fields each one edits

use super::field::Field;

/// One stage of the wizard, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Step {
    #[default]
    PersonalInformation,
    AddressInformation,
    Review,
}

impl Step {
    pub const ALL: [Step; 3] = [
        Step::PersonalInformation,
        Step::AddressInformation,
        Step::Review,
    ];

    pub fn count() -> usize {
        Self::ALL.len()
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    pub fn index(&self) -> usize {
        match self {
            Step::PersonalInformation => 0,
            Step::AddressInformation => 1,
            Step::Review => 2,
        }
    }

    /// Heading shown above the step and in the progress indicator
    pub fn title(&self) -> &'static str {
        match self {
            Step::PersonalInformation => "Personal Information",
            Step::AddressInformation => "Address Information",
            Step::Review => "Review",
        }
    }

    /// Editable fields on this step; the review step has none
    pub fn fields(&self) -> &'static [Field] {
        match self {
            Step::PersonalInformation => &[Field::Name, Field::Email, Field::Phone],
            Step::AddressInformation => &[
                Field::AddressLine1,
                Field::AddressLine2,
                Field::City,
                Field::State,
                Field::ZipCode,
            ],
            Step::Review => &[],
        }
    }

    pub fn is_first(&self) -> bool {
        self.index() == 0
    }

    pub fn is_last(&self) -> bool {
        self.index() + 1 == Self::count()
    }

    /// Following step, saturating at the last one
    pub fn next(&self) -> Self {
        Self::from_index(self.index() + 1).unwrap_or(*self)
    }

    /// Preceding step, saturating at the first one
    pub fn prev(&self) -> Self {
        self.index()
            .checked_sub(1)
            .and_then(Self::from_index)
            .unwrap_or(*self)
    }
}

/// Review summary sections: heading plus the fields listed under it
pub fn review_sections() -> [(&'static str, &'static [Field]); 2] {
    [
        (
            Step::PersonalInformation.title(),
            Step::PersonalInformation.fields(),
        ),
        (
            Step::AddressInformation.title(),
            Step::AddressInformation.fields(),
        ),
    ]
}
