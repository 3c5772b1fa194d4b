//! Known products whose descriptions are generated from metafields.
//!
//! The table is maintained by hand: add an entry whenever a new product gets
//! the description metafields filled in.

use super::id::{IdError, ProductId};

/// A named product in the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CatalogEntry {
    /// Short camelCase alias accepted on the command line.
    pub alias: &'static str,
    /// Shopify product ID.
    pub id: ProductId,
}

const fn entry(alias: &'static str, id: u64) -> CatalogEntry {
    CatalogEntry {
        alias,
        id: ProductId::new(id),
    }
}

/// Products listed in the store, keyed by alias.
pub const PRODUCT_CATALOG: &[CatalogEntry] = &[
    entry("sevenDayStarterKit", 8_048_084_451_587),
    entry("sevenDayStarterKitCustom", 8_548_174_659_843),
    entry("allInOneKit", 8_001_062_732_035),
    entry("allInOneKitCustom", 8_438_050_717_955),
    entry("aloeHydrationKit", 8_114_636_980_483),
    entry("aloeHydrationKitCustom", 8_626_870_714_627),
    entry("aloeVeraDrinkMix", 7_601_000_612_099),
    entry("appetiteSuppressant", 7_601_000_677_635),
    entry("bodyToner2x1", 8_181_958_279_427),
    entry("carbBlocker", 7_633_926_193_411),
    entry("collagen", 7_601_000_743_171),
    entry("colonCleanser", 7_601_000_775_939),
    entry("detoxPlusKit", 7_979_354_128_643),
    entry("detoxPlusKitCustom", 8_548_397_809_923),
    entry("drinkBoosterGreens", 7_647_125_995_779),
    entry("easyDigestion2x1", 8_121_877_823_747),
    entry("fatBurner2x1", 7_954_778_489_091),
    entry("foodLoverKit", 7_983_185_035_523),
    entry("foodLoverKitCustom", 8_548_406_329_603),
    entry("happyJoints2x1", 8_145_415_012_611),
    entry("heartBand", 7_601_001_103_619),
    entry("heartBandCard", 7_601_001_136_387),
    entry("laxativeTea", 8_358_596_378_883),
    entry("liverSuperCleanse2x1", 8_239_179_727_107),
    entry("mealReplacement15", 7_601_000_841_475),
    entry("menoPause2x1", 8_349_587_144_963),
    entry("motivationalWaterBottle", 8_001_513_226_499),
    entry("multiVitamin", 7_601_001_332_995),
    entry("naturalDetox", 7_601_001_070_851),
    entry("proteinBars", 7_611_445_444_867),
    entry("proteinBrownies", 8_154_863_993_091),
    entry("pureFiber", 8_248_682_873_091),
    entry("shakeBoosterCelluFit", 7_601_001_595_139),
    entry("shakeBoosterHighEnergy", 7_601_001_627_907),
    entry("shakeBoosterPureFiber", 7_601_001_660_675),
    entry("shakerBottle", 7_601_001_693_443),
    entry("sleepBurn2x1", 8_062_251_696_387),
    entry("slimDown", 7_601_001_726_211),
    entry("transformationKit", 7_983_124_316_419),
    entry("transformationKitCustom", 8_548_149_559_555),
    entry("transformationSupplementKit", 7_601_001_791_747),
    entry("waterLipoKit", 8_529_942_708_483),
    entry("waterLipo", 7_960_617_419_011),
    entry("waterLipoSpecial", 8_111_114_256_643),
    entry("waterLipoTea", 8_154_872_086_787),
    entry("wheyProtein30", 7_601_000_972_547),
];

/// Look up a catalog alias, ignoring ASCII case.
#[must_use]
pub fn lookup_alias(alias: &str) -> Option<ProductId> {
    PRODUCT_CATALOG
        .iter()
        .find(|e| e.alias.eq_ignore_ascii_case(alias.trim()))
        .map(|e| e.id)
}

/// Resolve a product reference given on the command line.
///
/// Accepts a catalog alias, a numeric ID, or a product global ID. Aliases are
/// checked first since several of them end in digits (`bodyToner2x1`).
///
/// # Errors
///
/// Returns [`IdError::UnknownProduct`] if the input is none of the above, or
/// the parse error for a malformed product global ID.
pub fn resolve_product(input: &str) -> Result<ProductId, IdError> {
    if let Some(id) = lookup_alias(input) {
        return Ok(id);
    }

    input.parse::<ProductId>().map_err(|e| match e {
        IdError::NoTrailingDigits(_) => IdError::UnknownProduct(input.trim().to_owned()),
        other => other,
    })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn test_catalog_aliases_are_unique() {
        let aliases: HashSet<_> = PRODUCT_CATALOG
            .iter()
            .map(|e| e.alias.to_ascii_lowercase())
            .collect();
        assert_eq!(aliases.len(), PRODUCT_CATALOG.len());
    }

    #[test]
    fn test_catalog_ids_are_unique() {
        let ids: HashSet<_> = PRODUCT_CATALOG.iter().map(|e| e.id).collect();
        assert_eq!(ids.len(), PRODUCT_CATALOG.len());
    }

    #[test]
    fn test_lookup_alias_case_insensitive() {
        assert_eq!(
            lookup_alias("carbblocker"),
            Some(ProductId::new(7_633_926_193_411))
        );
        assert_eq!(lookup_alias("doesNotExist"), None);
    }

    #[test]
    fn test_resolve_alias_ending_in_digit() {
        // Trailing digits alone would give product 1.
        assert_eq!(
            resolve_product("bodyToner2x1").unwrap(),
            ProductId::new(8_181_958_279_427)
        );
    }

    #[test]
    fn test_resolve_numeric_and_gid() {
        assert_eq!(resolve_product("42").unwrap(), ProductId::new(42));
        assert_eq!(
            resolve_product("gid://shopify/Product/42").unwrap(),
            ProductId::new(42)
        );
    }

    #[test]
    fn test_resolve_unknown() {
        assert_eq!(
            resolve_product("mysteryTonic").unwrap_err(),
            IdError::UnknownProduct("mysteryTonic".to_string())
        );
    }
}
