/// One orderable hardware offer: provider-internal SKU plus the commercial
/// model name. Several SKUs map to the same model (the provider reissues
/// references for the same offer), so the table is a many-to-one relation.
#[derive(Debug, Clone)]
pub struct CatalogEntry {
    pub sku: &'static str,
    pub model: &'static str,
}

pub const REFERENCES: &[CatalogEntry] = &[
    // Kimsufi
    CatalogEntry { sku: "150sk10", model: "KS-1" },
    CatalogEntry { sku: "150sk20", model: "KS-2" },
    CatalogEntry { sku: "150sk21", model: "KS-2" },
    CatalogEntry { sku: "150sk22", model: "KS-2 SSD" },
    CatalogEntry { sku: "150sk30", model: "KS-3" },
    CatalogEntry { sku: "150sk31", model: "KS-3" },
    CatalogEntry { sku: "150sk40", model: "KS-4" },
    CatalogEntry { sku: "150sk41", model: "KS-4" },
    CatalogEntry { sku: "150sk42", model: "KS-4" },
    CatalogEntry { sku: "150sk50", model: "KS-5" },
    CatalogEntry { sku: "150sk60", model: "KS-6" },
    // Game
    CatalogEntry { sku: "141game1", model: "GAME-1" },
    CatalogEntry { sku: "141game2", model: "GAME-2" },
    CatalogEntry { sku: "141game3", model: "GAME-3" },
    // So you Start IP
    CatalogEntry { sku: "142sys4", model: "SYS-IP-1" },
    CatalogEntry { sku: "142sys5", model: "SYS-IP-2" },
    CatalogEntry { sku: "142sys8", model: "SYS-IP-4" },
    CatalogEntry { sku: "142sys6", model: "SYS-IP-5" },
    CatalogEntry { sku: "142sys10", model: "SYS-IP-5S" },
    CatalogEntry { sku: "142sys7", model: "SYS-IP-6" },
    CatalogEntry { sku: "142sys9", model: "SYS-IP-6S" },
    // E3 SSD
    CatalogEntry { sku: "143sys13", model: "E3-SSD-1" },
    CatalogEntry { sku: "143sys10", model: "E3-SSD-2" },
    CatalogEntry { sku: "143sys11", model: "E3-SSD-3" },
    CatalogEntry { sku: "143sys12", model: "E3-SSD-4" },
    // E3 SATA
    CatalogEntry { sku: "143sys4", model: "E3-SAT-1" },
    CatalogEntry { sku: "143sys1", model: "E3-SAT-2" },
    CatalogEntry { sku: "143sys2", model: "E3-SAT-3" },
    CatalogEntry { sku: "143sys3", model: "E3-SAT-4" },
    // Backup storage
    CatalogEntry { sku: "141bk1", model: "BK-8T" },
    CatalogEntry { sku: "141bk2", model: "BK-24T" },
];

#[derive(Debug, Clone)]
pub struct ZoneAlias {
    pub code: &'static str,
    pub city: &'static str,
}

pub const ZONES: &[ZoneAlias] = &[
    ZoneAlias { code: "gra", city: "Gravelines" },
    ZoneAlias { code: "sbg", city: "Strasbourg" },
    ZoneAlias { code: "rbx", city: "Roubaix" },
    ZoneAlias { code: "bhs", city: "Beauharnois" },
];

/// Display name for a SKU; `None` when the SKU is not in the catalog.
pub fn model_for(sku: &str) -> Option<&'static str> {
    REFERENCES.iter().find(|e| e.sku == sku).map(|e| e.model)
}

/// City name for a zone code. Zone codes may carry a suffix ("rbx-hz");
/// only the part before the first hyphen is looked up, and an unknown
/// prefix is returned as-is rather than treated as an error.
pub fn city_for(zone_code: &str) -> &str {
    let prefix = zone_code.split('-').next().unwrap_or(zone_code);
    ZONES
        .iter()
        .find(|z| z.code == prefix)
        .map(|z| z.city)
        .unwrap_or(prefix)
}

/// A view over [`REFERENCES`], possibly restricted to requested model names.
#[derive(Debug, Clone)]
pub struct Catalog {
    entries: Vec<&'static CatalogEntry>,
}

impl Catalog {
    pub fn full() -> Self {
        Self {
            entries: REFERENCES.iter().collect(),
        }
    }

    /// An empty request keeps the whole catalog. Otherwise every entry whose
    /// model name is in the requested set is kept (case-sensitive exact
    /// match), including all duplicate SKUs sharing one name.
    pub fn filtered_by_models(models: &[String]) -> Self {
        if models.is_empty() {
            return Self::full();
        }
        Self {
            entries: REFERENCES
                .iter()
                .filter(|e| models.iter().any(|m| m.as_str() == e.model))
                .collect(),
        }
    }

    pub fn contains_sku(&self, sku: &str) -> bool {
        self.entries.iter().any(|e| e.sku == sku)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_model_for_known_sku() {
        assert_eq!(model_for("150sk10"), Some("KS-1"));
        assert_eq!(model_for("141bk2"), Some("BK-24T"));
    }

    #[test]
    fn test_model_for_unknown_sku() {
        assert_eq!(model_for("999xx9"), None);
        assert_eq!(model_for(""), None);
    }

    #[test]
    fn test_empty_filter_keeps_full_catalog() {
        let catalog = Catalog::filtered_by_models(&[]);
        assert_eq!(catalog.len(), REFERENCES.len());
    }

    #[test]
    fn test_filter_keeps_every_sku_sharing_a_model_name() {
        let catalog = Catalog::filtered_by_models(&["KS-2".to_string()]);
        assert_eq!(catalog.len(), 2);
        assert!(catalog.contains_sku("150sk20"));
        assert!(catalog.contains_sku("150sk21"));
        // exact match: "KS-2 SSD" is a different model
        assert!(!catalog.contains_sku("150sk22"));
    }

    #[test]
    fn test_filter_with_several_models() {
        let catalog =
            Catalog::filtered_by_models(&["KS-1".to_string(), "KS-4".to_string()]);
        assert_eq!(catalog.len(), 4);
        assert!(catalog.contains_sku("150sk10"));
        assert!(catalog.contains_sku("150sk40"));
        assert!(catalog.contains_sku("150sk41"));
        assert!(catalog.contains_sku("150sk42"));
    }

    #[test]
    fn test_filter_is_case_sensitive() {
        let catalog = Catalog::filtered_by_models(&["ks-2".to_string()]);
        assert!(catalog.is_empty());
    }

    #[test]
    fn test_filter_with_unknown_model() {
        let catalog = Catalog::filtered_by_models(&["KS-99".to_string()]);
        assert!(catalog.is_empty());
    }

    #[test]
    fn test_city_for_known_zone() {
        assert_eq!(city_for("gra"), "Gravelines");
        assert_eq!(city_for("sbg"), "Strasbourg");
        assert_eq!(city_for("rbx"), "Roubaix");
        assert_eq!(city_for("bhs"), "Beauharnois");
    }

    #[test]
    fn test_city_for_suffixed_zone() {
        assert_eq!(city_for("rbx-hz"), "Roubaix");
        assert_eq!(city_for("sbg-1"), "Strasbourg");
    }

    #[test]
    fn test_city_for_unknown_zone_falls_back_to_prefix() {
        assert_eq!(city_for("zz-unknown"), "zz");
        assert_eq!(city_for("par"), "par");
    }

    #[test]
    fn test_skus_are_unique() {
        for (i, entry) in REFERENCES.iter().enumerate() {
            assert!(
                REFERENCES[i + 1..].iter().all(|other| other.sku != entry.sku),
                "duplicate SKU {} in catalog",
                entry.sku
            );
        }
    }

    #[test]
    fn test_tables_have_valid_entries() {
        assert!(!REFERENCES.is_empty());
        for entry in REFERENCES {
            assert!(!entry.sku.is_empty());
            assert!(!entry.model.is_empty());
        }
        for alias in ZONES {
            assert!(!alias.code.is_empty());
            assert!(!alias.city.is_empty());
            assert!(!alias.code.contains('-'));
        }
    }
}
