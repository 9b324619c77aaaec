use contracts::domain::a002_employee::EmployeeStatus;
use contracts::domain::a004_approval::ApprovalStatus;
use leptos::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BadgeVariant {
    Success,
    Warning,
    Error,
    #[default]
    Neutral,
}

impl BadgeVariant {
    pub fn css_class(&self) -> &'static str {
        match self {
            BadgeVariant::Success => "badge badge--success",
            BadgeVariant::Warning => "badge badge--warning",
            BadgeVariant::Error => "badge badge--error",
            BadgeVariant::Neutral => "badge badge--neutral",
        }
    }
}

impl From<ApprovalStatus> for BadgeVariant {
    fn from(status: ApprovalStatus) -> Self {
        match status {
            ApprovalStatus::Pending => BadgeVariant::Warning,
            ApprovalStatus::Approved => BadgeVariant::Success,
            ApprovalStatus::Rejected => BadgeVariant::Error,
        }
    }
}

impl From<EmployeeStatus> for BadgeVariant {
    fn from(status: EmployeeStatus) -> Self {
        match status {
            EmployeeStatus::Active => BadgeVariant::Success,
            EmployeeStatus::Inactive => BadgeVariant::Neutral,
            EmployeeStatus::Expired => BadgeVariant::Error,
        }
    }
}

/// Colored status pill
#[component]
pub fn Badge(#[prop(optional)] variant: BadgeVariant, children: Children) -> impl IntoView {
    view! { <span class=variant.css_class()>{children()}</span> }
}

#[component]
pub fn ApprovalBadge(status: ApprovalStatus) -> impl IntoView {
    view! { <Badge variant=status.into()>{status.label()}</Badge> }
}

#[component]
pub fn EmployeeBadge(status: EmployeeStatus) -> impl IntoView {
    view! { <Badge variant=status.into()>{status.label()}</Badge> }
}
