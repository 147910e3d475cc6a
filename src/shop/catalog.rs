use serde::Serialize;

/// Stat deltas and price of one armory item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct EquipmentStats {
    pub cost: u32,
    pub power_bonus: u32,
    pub health_bonus: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CatalogEntry {
    pub name: &'static str,
    pub stats: EquipmentStats,
}

const fn entry(name: &'static str, cost: u32, power_bonus: u32, health_bonus: u32) -> CatalogEntry {
    CatalogEntry {
        name,
        stats: EquipmentStats {
            cost,
            power_bonus,
            health_bonus,
        },
    }
}

/// The armory's fixed stock, in display order.
pub const EQUIPMENT_CATALOG: [CatalogEntry; 5] = [
    entry("Bronze Sword", 30, 3, 0),
    entry("Iron Shield", 45, 1, 12),
    entry("Gladiator Helm", 60, 2, 18),
    entry("Champion Spear", 80, 5, 0),
    entry("Titan Plate", 120, 2, 30),
];

pub fn catalog() -> &'static [CatalogEntry] {
    &EQUIPMENT_CATALOG
}

/// Looks up a catalog entry by its 1-based menu number.
pub fn entry_by_number(number: usize) -> Option<&'static CatalogEntry> {
    number.checked_sub(1).and_then(|i| EQUIPMENT_CATALOG.get(i))
}
