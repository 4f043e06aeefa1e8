//! Form drafts for tenants and subscription plans.

use admin_console_sdk::{
    NewSubscriptionPlan, NewTenant, ResourceId, SubscriptionPlan, SubscriptionPlanPatch, Tenant,
    TenantPatch,
};
use validator::{Validate, ValidationError};

use super::form::Draft;

#[derive(Debug, Clone, PartialEq, Eq, Default, Validate)]
pub struct TenantDraft {
    pub id: ResourceId,
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,
    #[validate(email(message = "Email must be a valid email address"))]
    pub email: String,
    #[validate(length(min = 1, message = "Domain is required"))]
    pub domain: String,
    #[validate(length(min = 1, message = "Subdomain is required"))]
    pub subdomain: String,
    #[validate(length(min = 1, message = "Phone Number is required"))]
    pub phone_number: String,
    pub active: bool,
}

impl Draft for TenantDraft {
    type Resource = Tenant;

    fn from_resource(t: &Tenant) -> Self {
        Self {
            id: t.id,
            name: t.name.clone(),
            email: t.email.clone(),
            domain: t.domain.clone(),
            subdomain: t.subdomain.clone(),
            phone_number: t.phone_number.clone(),
            active: t.active,
        }
    }

    fn id(&self) -> Option<ResourceId> {
        (self.id != 0).then_some(self.id)
    }

    fn to_new(&self) -> NewTenant {
        NewTenant {
            name: self.name.clone(),
            email: self.email.clone(),
            domain: self.domain.clone(),
            subdomain: self.subdomain.clone(),
            phone_number: self.phone_number.clone(),
            active: self.active,
        }
    }

    fn to_patch(&self) -> TenantPatch {
        self.to_new().into()
    }
}

#[derive(Debug, Clone, PartialEq, Validate)]
pub struct SubscriptionPlanDraft {
    pub id: ResourceId,
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,
    #[validate(custom(
        function = "non_negative_price",
        message = "Price Monthly must be a positive number"
    ))]
    pub price_monthly: f64,
    #[validate(custom(
        function = "non_negative_price",
        message = "Price Yearly must be a positive number"
    ))]
    pub price_yearly: f64,
    #[validate(range(min = 1, message = "Max Users must be at least 1"))]
    pub max_users: i64,
    #[validate(range(min = 1, message = "Max Devices must be at least 1"))]
    pub max_devices: i64,
    #[validate(length(min = 1, message = "Description is required"))]
    pub description: String,
}

/// NaN and infinities would serialize as `null`, so they are rejected with negatives.
fn non_negative_price(value: f64) -> Result<(), ValidationError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(ValidationError::new("non_negative_price"))
    }
}

impl Default for SubscriptionPlanDraft {
    fn default() -> Self {
        Self {
            id: 0,
            name: String::new(),
            price_monthly: 0.0,
            price_yearly: 0.0,
            max_users: 1,
            max_devices: 1,
            description: String::new(),
        }
    }
}

impl Draft for SubscriptionPlanDraft {
    type Resource = SubscriptionPlan;

    fn from_resource(p: &SubscriptionPlan) -> Self {
        Self {
            id: p.id,
            name: p.name.clone(),
            price_monthly: p.price_monthly,
            price_yearly: p.price_yearly,
            max_users: p.max_users,
            max_devices: p.max_devices,
            description: p.description.clone(),
        }
    }

    fn id(&self) -> Option<ResourceId> {
        (self.id != 0).then_some(self.id)
    }

    fn to_new(&self) -> NewSubscriptionPlan {
        NewSubscriptionPlan {
            name: self.name.clone(),
            price_monthly: self.price_monthly,
            price_yearly: self.price_yearly,
            max_users: self.max_users,
            max_devices: self.max_devices,
            description: self.description.clone(),
        }
    }

    fn to_patch(&self) -> SubscriptionPlanPatch {
        self.to_new().into()
    }
}
