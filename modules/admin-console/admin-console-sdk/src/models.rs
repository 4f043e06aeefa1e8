//! Public models for the admin console.
//!
//! Field names follow the platform API, which speaks camelCase JSON.
//! Timestamps are assigned by the server and kept as opaque strings.

use serde::{Deserialize, Serialize};

use crate::resource::{Resource, ResourceId};

/// A customer organisation of the platform.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tenant {
    pub id: ResourceId,
    pub name: String,
    pub email: String,
    pub domain: String,
    pub subdomain: String,
    pub phone_number: String,
    pub active: bool,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

/// Payload for `POST /api/v1/tenants`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewTenant {
    pub name: String,
    pub email: String,
    pub domain: String,
    pub subdomain: String,
    pub phone_number: String,
    pub active: bool,
}

/// Partial update for `PUT /api/v1/tenants/{id}`. Absent fields are not sent.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TenantPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub domain: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subdomain: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub active: Option<bool>,
}

impl TenantPatch {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

impl From<NewTenant> for TenantPatch {
    fn from(t: NewTenant) -> Self {
        Self {
            name: Some(t.name),
            email: Some(t.email),
            domain: Some(t.domain),
            subdomain: Some(t.subdomain),
            phone_number: Some(t.phone_number),
            active: Some(t.active),
        }
    }
}

/// A priced tier with usage limits.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubscriptionPlan {
    pub id: ResourceId,
    pub name: String,
    pub price_monthly: f64,
    pub price_yearly: f64,
    pub max_users: i64,
    pub max_devices: i64,
    pub description: String,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

/// Payload for `POST /api/v1/subscription-plans`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewSubscriptionPlan {
    pub name: String,
    pub price_monthly: f64,
    pub price_yearly: f64,
    pub max_users: i64,
    pub max_devices: i64,
    pub description: String,
}

/// Partial update for `PUT /api/v1/subscription-plans/{id}`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubscriptionPlanPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price_monthly: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price_yearly: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_users: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_devices: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl SubscriptionPlanPatch {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

impl From<NewSubscriptionPlan> for SubscriptionPlanPatch {
    fn from(p: NewSubscriptionPlan) -> Self {
        Self {
            name: Some(p.name),
            price_monthly: Some(p.price_monthly),
            price_yearly: Some(p.price_yearly),
            max_users: Some(p.max_users),
            max_devices: Some(p.max_devices),
            description: Some(p.description),
        }
    }
}

impl Resource for Tenant {
    type New = NewTenant;
    type Patch = TenantPatch;

    const COLLECTION: &'static str = "tenants";
    const SINGULAR: &'static str = "tenant";
    const PLURAL: &'static str = "tenants";
    const TITLE: &'static str = "Tenant";

    fn id(&self) -> ResourceId {
        self.id
    }

    fn display_name(&self) -> &str {
        &self.name
    }
}

impl Resource for SubscriptionPlan {
    type New = NewSubscriptionPlan;
    type Patch = SubscriptionPlanPatch;

    const COLLECTION: &'static str = "subscription-plans";
    const SINGULAR: &'static str = "subscription plan";
    const PLURAL: &'static str = "subscription plans";
    const TITLE: &'static str = "Subscription Plan";

    fn id(&self) -> ResourceId {
        self.id
    }

    fn display_name(&self) -> &str {
        &self.name
    }
}
