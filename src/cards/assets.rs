//! Closed enumerations for the slug lineup and its image assets.
//!
//! Every creature resolves to an `ImageAsset` at catalog construction,
//! so renderers never look images up by file name.

use serde::{Deserialize, Serialize};

/// The four slugs that gate access and fight in battle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum CreatureKind {
    Slugger,
    Daggerpult,
    Zipacute,
    Hailstorm,
}

impl CreatureKind {
    /// All kinds in catalog order.
    pub const ALL: [CreatureKind; 4] = [
        CreatureKind::Slugger,
        CreatureKind::Daggerpult,
        CreatureKind::Zipacute,
        CreatureKind::Hailstorm,
    ];

    /// Display name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            CreatureKind::Slugger => "Slugger",
            CreatureKind::Daggerpult => "Daggerpult",
            CreatureKind::Zipacute => "Zipacute",
            CreatureKind::Hailstorm => "Hailstorm",
        }
    }

    /// On-chain asset id of the NFT for this slug.
    #[must_use]
    pub const fn asset_id(self) -> u64 {
        match self {
            CreatureKind::Slugger => 337_228_921,
            CreatureKind::Daggerpult => 527_479_654,
            CreatureKind::Zipacute => 527_475_282,
            CreatureKind::Hailstorm => 527_477_069,
        }
    }

    /// Reverse lookup from an on-chain asset id.
    #[must_use]
    pub fn from_asset_id(asset_id: u64) -> Option<Self> {
        Self::ALL.into_iter().find(|k| k.asset_id() == asset_id)
    }

    /// Card art for this slug.
    #[must_use]
    pub const fn image(self) -> ImageAsset {
        match self {
            CreatureKind::Slugger => ImageAsset::Slugger,
            CreatureKind::Daggerpult => ImageAsset::Daggerpult,
            CreatureKind::Zipacute => ImageAsset::Zipacute,
            CreatureKind::Hailstorm => ImageAsset::Hailstorm,
        }
    }
}

impl std::fmt::Display for CreatureKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Image handles bundled with the game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ImageAsset {
    Slugger,
    Daggerpult,
    Zipacute,
    Hailstorm,
    /// Face-down card shown for the opponent's bench.
    CardBack,
}

impl ImageAsset {
    /// Bundled file name.
    #[must_use]
    pub const fn file_name(self) -> &'static str {
        match self {
            ImageAsset::Slugger => "Slugger.png",
            ImageAsset::Daggerpult => "Daggerpult.png",
            ImageAsset::Zipacute => "Zipacute.png",
            ImageAsset::Hailstorm => "Hailstorm.png",
            ImageAsset::CardBack => "Back_Card.png",
        }
    }
}
