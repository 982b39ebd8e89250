//! Shop Catalog
//!
//! Items purchasable with score while the run is paused at the cafeteria.
//! Display strings keep the Turkish cafeteria theme of the HUD.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Purchasable item kinds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum ShopItemId {
    /// Restores one life
    Heal = 0,
    /// Permanent double jump for the rest of the run
    DoubleJump = 1,
    /// Ten seconds of immortality, repurchasable
    Immortal = 2,
}

impl ShopItemId {
    /// Price in score points.
    #[inline]
    pub fn price(self) -> u32 {
        match self {
            ShopItemId::Heal => 300,
            ShopItemId::DoubleJump => 500,
            ShopItemId::Immortal => 800,
        }
    }

    /// Display name on the shop card.
    pub fn name(self) -> &'static str {
        match self {
            ShopItemId::Heal => "TAVUK DÖNER",
            ShopItemId::DoubleJump => "BES KIDEMLİSİ",
            ShopItemId::Immortal => "MÜKAFAT ÇARŞI İZNİ",
        }
    }

    /// One-line effect description.
    pub fn description(self) -> &'static str {
        match self {
            ShopItemId::Heal => "+1 CAN YENİLER",
            ShopItemId::DoubleJump => "ÇİFT ZIPLAMA ÖZELLİĞİ",
            ShopItemId::Immortal => "10 SN DOKUNULMAZLIK",
        }
    }
}

/// A shop catalog entry for display layers.
#[derive(Clone, Copy, Debug, Serialize)]
pub struct ShopItem {
    /// Item kind
    pub id: ShopItemId,
    /// Display name
    pub name: &'static str,
    /// Effect description
    pub description: &'static str,
    /// Price in score points
    pub price: u32,
}

/// Full catalog in display order.
pub fn catalog() -> [ShopItem; 3] {
    [ShopItemId::Heal, ShopItemId::DoubleJump, ShopItemId::Immortal].map(|id| ShopItem {
        id,
        name: id.name(),
        description: id.description(),
        price: id.price(),
    })
}

/// Why a purchase was refused. The store stays untouched on refusal.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum PurchaseError {
    /// Score below the item price
    #[error("not enough score: item costs {price}, have {score}")]
    InsufficientScore {
        /// Item price
        price: u32,
        /// Score at the time of the attempt
        score: u32,
    },
    /// One-time upgrade already bought
    #[error("upgrade already owned")]
    AlreadyOwned,
    /// Heal refused at full lives
    #[error("lives already full")]
    LivesFull,
}
