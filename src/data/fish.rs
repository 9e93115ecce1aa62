use crate::shared::*;

/// Populate the FishRegistry.
///
/// Each fish has:
///   - motion: how it moves in the bobber bar (drives the perfect-catch base chance)
///   - difficulty: bobber-bar difficulty, 0 = trivial, ~110 for the hardest regulars
///   - boss_fish: legendaries; perfect catches are five times rarer
pub fn populate_fish(registry: &mut FishRegistry) {
    let fish: Vec<FishDef> = vec![
        // ── Regular ───────────────────────────────────────────────────────────

        FishDef {
            id: "sunfish".into(),
            name: "Sunfish".into(),
            motion: MotionCategory::Mixed,
            difficulty: 30.0,
            boss_fish: false,
            sell_price: 30,
        },

        FishDef {
            id: "carp".into(),
            name: "Carp".into(),
            motion: MotionCategory::Mixed,
            difficulty: 15.0,
            boss_fish: false,
            sell_price: 30,
        },

        FishDef {
            id: "bream".into(),
            name: "Bream".into(),
            motion: MotionCategory::Smooth,
            difficulty: 35.0,
            boss_fish: false,
            sell_price: 45,
        },

        FishDef {
            id: "sardine".into(),
            name: "Sardine".into(),
            motion: MotionCategory::FloaterOrSinker,
            difficulty: 30.0,
            boss_fish: false,
            sell_price: 40,
        },

        FishDef {
            id: "sturgeon".into(),
            name: "Sturgeon".into(),
            motion: MotionCategory::FloaterOrSinker,
            difficulty: 78.0,
            boss_fish: false,
            sell_price: 200,
        },

        FishDef {
            id: "octopus".into(),
            name: "Octopus".into(),
            motion: MotionCategory::FloaterOrSinker,
            difficulty: 95.0,
            boss_fish: false,
            sell_price: 150,
        },

        FishDef {
            id: "tuna".into(),
            name: "Tuna".into(),
            motion: MotionCategory::Smooth,
            difficulty: 70.0,
            boss_fish: false,
            sell_price: 100,
        },

        FishDef {
            id: "lingcod".into(),
            name: "Lingcod".into(),
            motion: MotionCategory::Mixed,
            difficulty: 85.0,
            boss_fish: false,
            sell_price: 120,
        },

        FishDef {
            id: "dorado".into(),
            name: "Dorado".into(),
            motion: MotionCategory::Mixed,
            difficulty: 78.0,
            boss_fish: false,
            sell_price: 100,
        },

        FishDef {
            id: "squid".into(),
            name: "Squid".into(),
            motion: MotionCategory::FloaterOrSinker,
            difficulty: 75.0,
            boss_fish: false,
            sell_price: 80,
        },

        FishDef {
            id: "blobfish".into(),
            name: "Blobfish".into(),
            motion: MotionCategory::FloaterOrSinker,
            difficulty: 75.0,
            boss_fish: false,
            sell_price: 500,
        },

        FishDef {
            id: "midnight_squid".into(),
            name: "Midnight Squid".into(),
            motion: MotionCategory::FloaterOrSinker,
            difficulty: 55.0,
            boss_fish: false,
            sell_price: 100,
        },

        FishDef {
            id: "pufferfish".into(),
            name: "Pufferfish".into(),
            motion: MotionCategory::FloaterOrSinker,
            difficulty: 80.0,
            boss_fish: false,
            sell_price: 200,
        },

        FishDef {
            id: "ghostfish".into(),
            name: "Ghostfish".into(),
            motion: MotionCategory::Mixed,
            difficulty: 50.0,
            boss_fish: false,
            sell_price: 45,
        },

        FishDef {
            id: "eel".into(),
            name: "Eel".into(),
            motion: MotionCategory::Smooth,
            difficulty: 70.0,
            boss_fish: false,
            sell_price: 85,
        },

        FishDef {
            id: "catfish".into(),
            name: "Catfish".into(),
            motion: MotionCategory::Mixed,
            difficulty: 75.0,
            boss_fish: false,
            sell_price: 200,
        },

        FishDef {
            id: "woodskip".into(),
            name: "Woodskip".into(),
            motion: MotionCategory::Mixed,
            difficulty: 50.0,
            boss_fish: false,
            sell_price: 75,
        },

        FishDef {
            id: "stonefish".into(),
            name: "Stonefish".into(),
            motion: MotionCategory::FloaterOrSinker,
            difficulty: 65.0,
            boss_fish: false,
            sell_price: 300,
        },

        FishDef {
            id: "lava_eel".into(),
            name: "Lava Eel".into(),
            motion: MotionCategory::Mixed,
            difficulty: 90.0,
            boss_fish: false,
            sell_price: 700,
        },

        FishDef {
            id: "scorpion_carp".into(),
            name: "Scorpion Carp".into(),
            motion: MotionCategory::Dart,
            difficulty: 90.0,
            boss_fish: false,
            sell_price: 150,
        },

        FishDef {
            id: "super_cucumber".into(),
            name: "Super Cucumber".into(),
            motion: MotionCategory::FloaterOrSinker,
            difficulty: 80.0,
            boss_fish: false,
            sell_price: 250,
        },

        FishDef {
            id: "rainbow_trout".into(),
            name: "Rainbow Trout".into(),
            motion: MotionCategory::Mixed,
            difficulty: 45.0,
            boss_fish: false,
            sell_price: 65,
        },

        // ── Legendary ─────────────────────────────────────────────────────────

        FishDef {
            id: "crimsonfish".into(),
            name: "Crimsonfish".into(),
            motion: MotionCategory::Mixed,
            difficulty: 95.0,
            boss_fish: true,
            sell_price: 1_500,
        },

        FishDef {
            id: "angler".into(),
            name: "Angler".into(),
            motion: MotionCategory::Smooth,
            difficulty: 85.0,
            boss_fish: true,
            sell_price: 900,
        },

        FishDef {
            id: "glacierfish".into(),
            name: "Glacierfish".into(),
            motion: MotionCategory::Mixed,
            difficulty: 100.0,
            boss_fish: true,
            sell_price: 1_000,
        },

        FishDef {
            id: "legend".into(),
            name: "Legend".into(),
            motion: MotionCategory::Mixed,
            difficulty: 110.0,
            boss_fish: true,
            sell_price: 5_000,
        },

        FishDef {
            id: "mutant_carp".into(),
            name: "Mutant Carp".into(),
            motion: MotionCategory::Dart,
            difficulty: 80.0,
            boss_fish: true,
            sell_price: 1_000,
        },
    ];

    for f in fish {
        registry.fish.insert(f.id.clone(), f);
    }
}
