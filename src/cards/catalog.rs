//! The standard card catalog.
//!
//! One constructor per shipped card, plus [`upgraders`], [`skills`] and
//! [`characters`] listing them in catalog order. The behaviour behind each
//! [`SkillEffect`] lives in [`crate::effects`].

use super::definition::{
    Archetype, CharacterDef, CharacterEffect, Rarity, SkillDef, SkillEffect, UpgraderDef,
};
use crate::cards::CardType;
use crate::ore::{Attribute, Reaction, ValueChange};
use crate::triggers::Activation;

fn doubler(name: &str, attribute: Attribute) -> UpgraderDef {
    UpgraderDef::new(name, ValueChange::Multiply(2.0))
        .granting(attribute)
        .with_rarity(Rarity::R)
        .with_description(format!("x2 value. Adds 1 {attribute}."))
}

pub fn soaker() -> UpgraderDef {
    doubler("Soaker", Attribute::Wet)
}

pub fn flame_thrower() -> UpgraderDef {
    doubler("Flame Thrower", Attribute::Burn)
}

pub fn floral_infuser() -> UpgraderDef {
    doubler("Floral Infuser", Attribute::Bloom)
}

pub fn zapper() -> UpgraderDef {
    doubler("Zapper", Attribute::Shock)
}

pub fn freezer() -> UpgraderDef {
    doubler("Freezer", Attribute::Frost)
}

/// Every standard upgrader.
#[must_use]
pub fn upgraders() -> Vec<UpgraderDef> {
    vec![soaker(), flame_thrower(), floral_infuser(), zapper(), freezer()]
}

fn added(attribute: Attribute) -> Activation {
    Activation::attribute_added().with_attribute(attribute)
}

// On-trigger skills

pub fn surge() -> SkillDef {
    SkillDef::new("Surge", SkillEffect::Surge)
        .with_rarity(Rarity::R)
        .with_description("When Wet is added: +50 value.")
        .with_trigger(added(Attribute::Wet))
        .with_value(50.0)
        .with_archetype(Archetype::Additive)
        .with_archetype(Archetype::Element(Attribute::Wet))
}

pub fn steam_engine() -> SkillDef {
    SkillDef::new("Steam Engine", SkillEffect::SteamEngine)
        .with_rarity(Rarity::R)
        .with_description("When an upgrader adds Wet: remove 1 Wet, x2 value.")
        .with_trigger(added(Attribute::Wet).with_card_type(CardType::Upgrader))
        .with_value(2.0)
        .with_archetype(Archetype::Multiplicative)
        .with_archetype(Archetype::RemoveAttribute)
        .with_archetype(Archetype::Element(Attribute::Wet))
}

pub fn rewind() -> SkillDef {
    SkillDef::new("Rewind", SkillEffect::Rewind)
        .with_rarity(Rarity::SR)
        .with_description("When a skill removes an attribute: add it back.")
        .with_trigger(Activation::attribute_removed().with_card_type(CardType::Skill))
        .with_archetype(Archetype::AddAttribute)
}

pub fn storm_conduit() -> SkillDef {
    SkillDef::new("Storm Conduit", SkillEffect::StormConduit)
        .with_rarity(Rarity::UC)
        .with_description("On Electrocute: add 1 Shock.")
        .with_trigger(Activation::reaction_triggered().with_reaction(Reaction::Electrocute))
        .with_archetype(Archetype::Reaction)
        .with_archetype(Archetype::AddAttribute)
        .with_archetype(Archetype::Element(Attribute::Shock))
}

pub fn current() -> SkillDef {
    SkillDef::new("Current", SkillEffect::Current)
        .with_rarity(Rarity::SSR)
        .with_description("When Shock is added: x(1 + Shock on the ore) value.")
        .with_trigger(added(Attribute::Shock))
        .with_archetype(Archetype::Multiplicative)
        .with_archetype(Archetype::Element(Attribute::Shock))
}

pub fn double_strike() -> SkillDef {
    SkillDef::new("Double Strike", SkillEffect::DoubleStrike)
        .with_rarity(Rarity::SR)
        .with_description("When Shock is added by another card: add 1 Shock.")
        .with_trigger(added(Attribute::Shock))
        .with_archetype(Archetype::AddAttribute)
        .with_archetype(Archetype::Element(Attribute::Shock))
}

pub fn unwavering_flame() -> SkillDef {
    SkillDef::new("Unwavering Flame", SkillEffect::UnwaveringFlame)
        .with_rarity(Rarity::SR)
        .with_description("When Burn is lost and none is left: add 1 Burn, +25 value.")
        .with_trigger(Activation::reaction_triggered().with_reaction_attributes([Attribute::Burn]))
        .with_trigger(Activation::attribute_removed().with_attribute(Attribute::Burn))
        .with_value(25.0)
        .with_archetype(Archetype::Additive)
        .with_archetype(Archetype::AddAttribute)
        .with_archetype(Archetype::Element(Attribute::Burn))
}

pub fn ignite() -> SkillDef {
    SkillDef::new("Ignite", SkillEffect::Ignite)
        .with_rarity(Rarity::SSR)
        .with_description("After Scorched: the next attribute added by another card adds 1 Burn.")
        .with_trigger(Activation::reaction_triggered().with_reaction(Reaction::Scorched))
        .with_trigger(Activation::attribute_added())
        .with_archetype(Archetype::Reaction)
        .with_archetype(Archetype::AddAttribute)
        .with_archetype(Archetype::Element(Attribute::Burn))
}

pub fn budding_blossom() -> SkillDef {
    SkillDef::new("Budding Blossom", SkillEffect::BuddingBlossom)
        .with_rarity(Rarity::SR)
        .with_description("When Wet is added: +1 Growth. At 2 Growth: x2 value, add 1 Bloom.")
        .with_trigger(added(Attribute::Wet))
        .with_value(2.0)
        .with_max_stacks(2)
        .with_archetype(Archetype::Multiplicative)
        .with_archetype(Archetype::AddAttribute)
        .with_archetype(Archetype::Element(Attribute::Bloom))
}

pub fn bountiful_infusion() -> SkillDef {
    SkillDef::new("Bountiful Infusion", SkillEffect::BountifulInfusion)
        .with_rarity(Rarity::SR)
        .with_description("Add 1 random attribute.")
        .with_trigger(Activation::no_activation())
        .with_archetype(Archetype::AddAttribute)
        .with_archetype(Archetype::Random)
        .unlisted()
}

pub fn overflow() -> SkillDef {
    SkillDef::new("Overflow", SkillEffect::Overflow)
        .with_rarity(Rarity::R)
        .with_description("When 2 or more of one attribute are added at once: add 1 more.")
        .with_trigger(Activation::attribute_added().with_amount(2))
        .with_archetype(Archetype::AddAttribute)
}

pub fn volcano() -> SkillDef {
    SkillDef::new("Volcano", SkillEffect::Volcano)
        .with_rarity(Rarity::SR)
        .with_description("On any reaction: +1 Erupt. At 3 Erupt: add 2 Burn.")
        .with_trigger(Activation::reaction_triggered())
        .with_max_stacks(3)
        .with_archetype(Archetype::Reaction)
        .with_archetype(Archetype::AddAttribute)
        .with_archetype(Archetype::Element(Attribute::Burn))
}

pub fn resonance() -> SkillDef {
    SkillDef::new("Resonance", SkillEffect::Resonance)
        .with_rarity(Rarity::R)
        .with_description("On any reaction: add 1 of the reacting attributes at random.")
        .with_trigger(Activation::reaction_triggered())
        .with_archetype(Archetype::Reaction)
        .with_archetype(Archetype::AddAttribute)
        .with_archetype(Archetype::Random)
}

pub fn amplifier() -> SkillDef {
    SkillDef::new("Amplifier", SkillEffect::Amplifier)
        .with_rarity(Rarity::SR)
        .with_description("When value increases by more than 1 and less than 11: multiply by it.")
        .with_trigger(Activation::ore_value_increased())
        .with_archetype(Archetype::Multiplicative)
        .unlisted()
}

// Static skills

pub fn vault() -> SkillDef {
    SkillDef::new("Vault", SkillEffect::Vault)
        .with_rarity(Rarity::UC)
        .with_description("Records every value increase. End of round: add the total.")
        .with_trigger(Activation::ore_value_increased())
        .with_archetype(Archetype::Additive)
}

pub fn catalyst() -> SkillDef {
    SkillDef::new("Catalyst", SkillEffect::Catalyst)
        .with_rarity(Rarity::SR)
        .with_description(
            "Records multipliers from skills and characters. End of round: multiply by the total.",
        )
        .with_trigger(Activation::ore_value_multiplied().with_card_type(CardType::Skill))
        .with_trigger(Activation::ore_value_multiplied().with_card_type(CardType::Character))
        .with_archetype(Archetype::Multiplicative)
}

pub fn rising_flame() -> SkillDef {
    SkillDef::new("Rising Flame", SkillEffect::RisingFlame)
        .with_rarity(Rarity::SR)
        .with_description("When Burn is added: +1 Kindling. End of round: x(1 + Kindling).")
        .with_trigger(added(Attribute::Burn))
        .with_archetype(Archetype::Multiplicative)
        .with_archetype(Archetype::Element(Attribute::Burn))
}

pub fn cleanse() -> SkillDef {
    SkillDef::new("Cleanse", SkillEffect::Cleanse)
        .with_rarity(Rarity::SSR)
        .with_description("End of round: remove every attribute, x(1 + removed).")
        .with_trigger(Activation::no_activation())
        .with_archetype(Archetype::Multiplicative)
        .with_archetype(Archetype::RemoveAttribute)
}

pub fn cascade() -> SkillDef {
    SkillDef::new("Cascade", SkillEffect::Cascade)
        .with_rarity(Rarity::SR)
        .with_description("Each other skill activation: +1 Ripple. End of round: x(1 + 0.5 Ripple).")
        .with_trigger(Activation::effect_activated().with_card_type(CardType::Skill))
        .with_archetype(Archetype::Multiplicative)
}

pub fn quench() -> SkillDef {
    SkillDef::new("Quench", SkillEffect::Quench)
        .with_rarity(Rarity::R)
        .with_description("End of round: add 1 Wet per Burn.")
        .with_trigger(Activation::no_activation())
        .with_archetype(Archetype::AddAttribute)
        .with_archetype(Archetype::Element(Attribute::Wet))
}

pub fn attribute_duplication() -> SkillDef {
    SkillDef::new("Attribute Duplication", SkillEffect::AttributeDuplication)
        .with_rarity(Rarity::R)
        .with_description("End of round: add 1 of each attribute on the ore.")
        .with_trigger(Activation::no_activation())
        .with_archetype(Archetype::AddAttribute)
}

// Passive skills

pub fn scorched_amplifier() -> SkillDef {
    SkillDef::new("Scorched Amplifier", SkillEffect::ScorchedAmplifier)
        .with_rarity(Rarity::SR)
        .with_description("After Scorched: value changes from Burn cards are doubled.")
        .with_trigger(Activation::reaction_triggered().with_reaction(Reaction::Scorched))
        .with_archetype(Archetype::Multiplicative)
        .with_archetype(Archetype::Element(Attribute::Burn))
}

/// Every standard skill, listed or not.
#[must_use]
pub fn skills() -> Vec<SkillDef> {
    vec![
        surge(),
        steam_engine(),
        rewind(),
        storm_conduit(),
        current(),
        double_strike(),
        unwavering_flame(),
        ignite(),
        budding_blossom(),
        bountiful_infusion(),
        overflow(),
        volcano(),
        resonance(),
        amplifier(),
        vault(),
        catalyst(),
        rising_flame(),
        cleanse(),
        cascade(),
        quench(),
        attribute_duplication(),
        scorched_amplifier(),
    ]
}

// Characters

pub fn mechanic() -> CharacterDef {
    CharacterDef::new("Mechanic", CharacterEffect::Mechanic)
        .with_description("When Shock is added: +1 Charge. At 3 Charge: x5 value.")
        .with_trigger(added(Attribute::Shock))
        .with_value(5.0)
        .with_max_stacks(3)
        .with_archetype(Archetype::Multiplicative)
        .with_archetype(Archetype::Element(Attribute::Shock))
}

pub fn witch() -> CharacterDef {
    CharacterDef::new("Witch", CharacterEffect::Witch)
        .with_description("On any reaction: +100 value.")
        .with_trigger(Activation::reaction_triggered())
        .with_value(100.0)
        .with_archetype(Archetype::Additive)
        .with_archetype(Archetype::Reaction)
}

/// Every standard character.
#[must_use]
pub fn characters() -> Vec<CharacterDef> {
    vec![mechanic(), witch()]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::SkillKind;

    #[test]
    fn test_catalog_sizes() {
        assert_eq!(upgraders().len(), 5);
        assert_eq!(skills().len(), 22);
        assert_eq!(characters().len(), 2);
    }

    #[test]
    fn test_static_skills() {
        let statics: Vec<_> = skills()
            .into_iter()
            .filter(|s| s.kind == SkillKind::Static)
            .map(|s| s.name)
            .collect();
        assert_eq!(
            statics,
            vec![
                "Vault",
                "Catalyst",
                "Rising Flame",
                "Cleanse",
                "Cascade",
                "Quench",
                "Attribute Duplication"
            ]
        );
    }

    #[test]
    fn test_stacking_skills_have_thresholds() {
        for skill in skills() {
            if skill.effect.uses_max_stacks() {
                assert!(skill.max_stacks > 0, "{} has no threshold", skill.name);
            }
        }
    }

    #[test]
    fn test_unlisted() {
        let unlisted: Vec<_> = skills()
            .into_iter()
            .filter(|s| s.unlisted)
            .map(|s| s.name)
            .collect();
        assert_eq!(unlisted, vec!["Bountiful Infusion", "Amplifier"]);
    }
}
