// ABOUTME: The five wizard steps and their fixed linear order

/// Steps in the trade-in wizard
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WizardStep {
    BrandSelect,
    SeriesSelect,
    VariantSelect,
    Appointment,
    Estimate,
}

impl WizardStep {
    /// Get all steps in order
    pub fn all() -> &'static [WizardStep] {
        &[
            Self::BrandSelect,
            Self::SeriesSelect,
            Self::VariantSelect,
            Self::Appointment,
            Self::Estimate,
        ]
    }

    /// Zero-based position, 0..=4
    pub fn index(&self) -> usize {
        match self {
            Self::BrandSelect => 0,
            Self::SeriesSelect => 1,
            Self::VariantSelect => 2,
            Self::Appointment => 3,
            Self::Estimate => 4,
        }
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::all().get(index).copied()
    }

    /// Get the total number of steps
    pub fn total() -> usize {
        5
    }

    /// Heading shown above the step content
    pub fn title(&self) -> &'static str {
        match self {
            Self::BrandSelect => "Select brand of your phone",
            Self::SeriesSelect => "Select Series",
            Self::VariantSelect => "Select Variant",
            Self::Appointment => "Schedule Appointment",
            Self::Estimate => "Estimated Price",
        }
    }

    /// Short label for the progress bar
    pub fn label(&self) -> &'static str {
        match self {
            Self::BrandSelect => "Brand",
            Self::SeriesSelect => "Series",
            Self::VariantSelect => "Variant",
            Self::Appointment => "Appointment",
            Self::Estimate => "Price",
        }
    }

    pub fn next(&self) -> Option<Self> {
        Self::from_index(self.index() + 1)
    }

    pub fn previous(&self) -> Option<Self> {
        self.index().checked_sub(1).and_then(Self::from_index)
    }

    pub fn is_terminal(&self) -> bool {
        *self == Self::Estimate
    }
}
