use std::collections::BTreeMap;

use farmkit_utils::format_rupiah;
use serde::{Deserialize, Serialize};

pub const DEFAULT_CONTACT_EMAIL: &str = "info@smartfarm.com";
pub const DEFAULT_CONTACT_PHONE: &str = "+62 812 3456 7890";
pub const DEFAULT_CONTACT_ADDRESS: &str = "Jl. Pertanian No. 1, Kota Hijau, Indonesia";

/// The whole `data.json` document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LandingContent {
    pub app_name: String,
    #[serde(default)]
    pub logo_header: String,
    #[serde(default)]
    pub logo_footer: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub favicon: Option<String>,
    #[serde(default)]
    pub footer_motto: String,
    #[serde(default)]
    pub contact: Contact,
    /// Platform name to link. A `null` entry hides the platform.
    #[serde(default)]
    pub social_media: BTreeMap<String, Option<SocialLink>>,
    #[serde(default)]
    pub features: Vec<Feature>,
    #[serde(default)]
    pub products: Vec<Product>,
}

impl LandingContent {
    /// Social links that are present, ordered by platform name.
    pub fn social_links(&self) -> impl Iterator<Item = (&str, &SocialLink)> {
        self.social_media
            .iter()
            .filter_map(|(platform, link)| link.as_ref().map(|l| (platform.as_str(), l)))
    }

    #[must_use]
    pub fn product(&self, id: &str) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }
}

/// Footer contact block. Missing or blank entries read as the site defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
}

impl Contact {
    #[must_use]
    pub fn email(&self) -> &str {
        non_blank(self.email.as_deref()).unwrap_or(DEFAULT_CONTACT_EMAIL)
    }

    #[must_use]
    pub fn phone(&self) -> &str {
        non_blank(self.phone.as_deref()).unwrap_or(DEFAULT_CONTACT_PHONE)
    }

    #[must_use]
    pub fn address(&self) -> &str {
        non_blank(self.address.as_deref()).unwrap_or(DEFAULT_CONTACT_ADDRESS)
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialLink {
    pub url: String,
    pub icon: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Feature {
    pub icon: String,
    pub title: String,
    pub description: String,
}

/// A subscription package on the price list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: String,
    pub original_price: f64,
    /// Percent off the original price.
    #[serde(default)]
    pub discount: f64,
}

/// Display strings for a product price. `original` is set only when a
/// discount applies and is shown struck through next to `current`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PriceTag {
    pub original: Option<String>,
    pub current: String,
}

impl Product {
    /// Package sold on request only; the price list shows a contact prompt.
    pub const CONTACT_ONLY_ID: &'static str = "enterprise";

    #[must_use]
    pub fn is_discounted(&self) -> bool {
        self.discount > 0.0
    }

    #[must_use]
    pub fn current_price(&self) -> f64 {
        if self.is_discounted() {
            self.original_price * (1.0 - self.discount / 100.0)
        } else {
            self.original_price
        }
    }

    #[must_use]
    pub fn price_tag(&self) -> PriceTag {
        PriceTag {
            original: self
                .is_discounted()
                .then(|| format_rupiah(self.original_price)),
            current: format_rupiah(self.current_price()),
        }
    }

    #[must_use]
    pub fn is_contact_only(&self) -> bool {
        self.id == Self::CONTACT_ONLY_ID
    }

    /// Package heading, e.g. `Paket Basic` for id `basic`.
    #[must_use]
    pub fn title(&self) -> String {
        let mut chars = self.id.chars();
        let name: String = chars
            .next()
            .map(|first| first.to_uppercase().chain(chars).collect())
            .unwrap_or_default();
        format!("Paket {name}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(id: &str, original_price: f64, discount: f64) -> Product {
        Product {
            id: id.to_owned(),
            original_price,
            discount,
        }
    }

    #[test]
    fn discounted_price_tag_shows_both_prices() {
        let p = product("basic", 500_000.0, 10.0);
        assert!((p.current_price() - 450_000.0).abs() < 1e-6);
        assert_eq!(
            p.price_tag(),
            PriceTag {
                original: Some("Rp 500.000".to_owned()),
                current: "Rp 450.000".to_owned(),
            }
        );
    }

    #[test]
    fn fractional_discount_rounds_for_display() {
        let p = product("advanced", 1_500_000.0, 14.0);
        assert_eq!(p.price_tag().current, "Rp 1.290.000");
    }

    #[test]
    fn no_discount_shows_only_current() {
        for discount in [0.0, -5.0] {
            let p = product("basic", 500_000.0, discount);
            assert_eq!(p.price_tag().original, None);
            assert_eq!(p.price_tag().current, "Rp 500.000");
        }
    }

    #[test]
    fn titles_and_contact_only() {
        assert_eq!(product("advanced", 0.0, 0.0).title(), "Paket Advanced");
        assert_eq!(product("", 0.0, 0.0).title(), "Paket ");
        assert!(product("enterprise", 0.0, 0.0).is_contact_only());
        assert!(!product("basic", 0.0, 0.0).is_contact_only());
    }

    #[test]
    fn contact_defaults_fill_gaps() {
        let c = Contact {
            email: None,
            phone: Some("  ".to_owned()),
            address: Some("Jl. Sawah 2".to_owned()),
        };
        assert_eq!(c.email(), DEFAULT_CONTACT_EMAIL);
        assert_eq!(c.phone(), DEFAULT_CONTACT_PHONE);
        assert_eq!(c.address(), "Jl. Sawah 2");
    }
}
