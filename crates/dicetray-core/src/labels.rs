//! Known label sets: spell and attack names, saving-throw modifiers,
//! and skill names.
//!
//! Labels are display data only. A request may carry any string in its
//! label fields; these tables feed the random request generator and the
//! rules listing.

/// Spell and attack names usable as ability labels.
pub const ABILITIES: &[&str] = &[
    "Magic Missile",
    "Cure Wounds",
    "Detect Magic",
    "Thunderwave",
    "Burning Hands",
    "Charm Person",
    "Fly",
    "Invisibility",
    "Water Walk",
    "Light",
    "Protection from Evil and Good",
    "Sleep",
    "Web",
    "Fireball",
    "Teleport",
    "Raise Dead",
    "Wall of Force",
    "Disintegrate",
    "Eldritch Blast",
    "Hex",
    "Disguise Self",
    "Deceptive Magic",
    "Mystic Arcanum",
    "Shadow Bolt",
    "Undying Ward",
    "Mystic Shroud",
    "Dark One's Blessing",
    "Hellish Rebuke",
    "Black Blade",
    "Devil's Sight",
    "Flee the Scene",
    "Curse of the Otherworld",
    "Hexing Blade",
    "Pact of the Blade",
    "Mystic Chain",
    "Infernal Tyrant",
    "Warlock's Call",
    "Mystic Gates",
    "Dark One's Own Luck",
];

/// Saving-throw modifier abbreviations.
pub const MODIFIERS: &[&str] = &["STR", "DEX", "CON", "INT", "WIS", "CHA"];

/// Skill names usable for checks.
pub const SKILLS: &[&str] = &[
    "Acrobatics",
    "Animal Handling",
    "Arcana",
    "Athletics",
    "Deception",
    "History",
    "Insight",
    "Intimidation",
    "Investigation",
    "Medicine",
    "Nature",
    "Perception",
    "Performance",
    "Persuasion",
    "Religion",
    "Sleight of Hand",
    "Stealth",
    "Survival",
];
