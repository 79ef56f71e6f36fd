/// Where the landlord is today; picks which service columns are shown.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Stage {
    #[default]
    Preparing,
    AlreadyLetting,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ServiceColumn {
    GettingReady,
    FindingTenants,
    Managing,
}

impl Stage {
    pub const ALL: [Stage; 2] = [Stage::Preparing, Stage::AlreadyLetting];

    /// Value of the button's `data-stage` attribute.
    pub fn attr(self) -> &'static str {
        match self {
            Stage::Preparing => "1",
            Stage::AlreadyLetting => "2",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Stage::Preparing => "I'm getting ready to let",
            Stage::AlreadyLetting => "I already have tenants",
        }
    }

    pub fn visible_columns(self) -> &'static [ServiceColumn] {
        match self {
            Stage::Preparing => &[
                ServiceColumn::GettingReady,
                ServiceColumn::FindingTenants,
                ServiceColumn::Managing,
            ],
            Stage::AlreadyLetting => &[ServiceColumn::FindingTenants, ServiceColumn::Managing],
        }
    }

    pub fn shows(self, column: ServiceColumn) -> bool {
        self.visible_columns().contains(&column)
    }
}

impl ServiceColumn {
    pub const ALL: [ServiceColumn; 3] = [
        ServiceColumn::GettingReady,
        ServiceColumn::FindingTenants,
        ServiceColumn::Managing,
    ];

    /// Value of the column's `data-column` attribute.
    pub fn number(self) -> u8 {
        match self {
            ServiceColumn::GettingReady => 1,
            ServiceColumn::FindingTenants => 2,
            ServiceColumn::Managing => 3,
        }
    }
}

pub fn grid_class(visible_columns: usize) -> &'static str {
    match visible_columns {
        1 => "grid grid-cols-1 gap-8 lg:gap-12 max-w-md mx-auto",
        2 => "grid grid-cols-1 lg:grid-cols-2 gap-8 lg:gap-12 max-w-4xl mx-auto",
        _ => "grid grid-cols-1 lg:grid-cols-3 gap-8 lg:gap-12",
    }
}
