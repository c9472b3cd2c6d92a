//! Value changes and attribute chemistry, applied to a [`GameState`].
//!
//! Every operation takes the card that caused it and an output buffer.
//! Emitted events are stamped, logged and appended to the buffer for the
//! caller to resolve, with one exception: reactions are resolved on the spot
//! through a singleton cascade, before the attribute scan continues.

use tracing::debug;

use super::{Attribute, ValueChange};
use crate::cards::SkillKind;
use crate::core::GameState;
use crate::effects::passive_modifier;
use crate::stack::CascadeResolver;
use crate::triggers::{Activation, CardRef};

impl GameState {
    /// Apply a value change from `source`.
    ///
    /// The raw amount is offered to every active passive skill in list order;
    /// each may rescale it. The rescaled amount is applied to the ore and
    /// reported on the emitted event.
    pub fn increase_value(
        &mut self,
        change: ValueChange,
        source: &CardRef,
        out: &mut Vec<Activation>,
    ) {
        let mut amount = change.amount();
        let mut booster = None;
        for slot in &self.skills {
            if slot.def.kind != SkillKind::Passive || !slot.instance.passive_active {
                continue;
            }
            let rescaled = passive_modifier(&slot.def, change.with_amount(amount), source);
            if rescaled != amount {
                booster = Some(slot.def.name.as_str());
            }
            amount = rescaled;
        }

        let applied = change.with_amount(amount);
        self.ore.apply(applied);
        debug!(
            source = %source,
            change = %applied,
            booster = booster.unwrap_or("-"),
            value = self.ore.value(),
            "ore value changed"
        );

        let event = match applied {
            ValueChange::Add(_) => Activation::ore_value_increased(),
            ValueChange::Multiply(_) => Activation::ore_value_multiplied(),
        };
        out.push(self.emit(event.with_value(amount).with_source(source.clone())));
    }

    /// Add `amount` units of `attribute` from `source`, reacting as needed.
    ///
    /// Each unit already on the ore when the call starts is compared, front
    /// to back, with the incoming unit at the scan offset. A resident weak to
    /// the incoming attribute consumes one unit of each, emits a
    /// `ReactionTriggered` event and resolves it immediately.
    pub fn add_attribute(
        &mut self,
        attribute: Attribute,
        amount: u32,
        source: &CardRef,
        out: &mut Vec<Activation>,
    ) {
        let prior = self.ore.attributes().len();
        let added = Activation::attribute_added()
            .with_attribute(attribute)
            .with_amount(amount)
            .with_source(source.clone());
        out.push(self.emit(added));
        self.ore.push_units(attribute, amount);
        debug!(
            source = %source,
            %attribute,
            amount,
            attributes = %self.ore.attribute_list(),
            "attribute added"
        );

        let mut offset = prior;
        let mut i = 0;
        while i < prior {
            if self.ore.attributes().len() < 2 {
                break;
            }
            let (Some(resident), Some(incoming)) =
                (self.ore.attribute_at(i), self.ore.attribute_at(offset))
            else {
                break;
            };
            if !resident.is_weak_to(incoming) {
                i += 1;
                continue;
            }

            // Both removals precede the incoming unit's index, so it shifts down by one.
            self.remove_attribute(resident, 1, source, true, out);
            self.remove_attribute(incoming, 1, source, true, out);
            offset = offset.saturating_sub(1);
            self.apply_reaction(resident, incoming, source);
        }
    }

    /// Remove up to `amount` units of `attribute`.
    ///
    /// Missing attributes are a logged no-op. Reaction-caused removals emit no
    /// events.
    pub fn remove_attribute(
        &mut self,
        attribute: Attribute,
        amount: u32,
        source: &CardRef,
        is_reaction: bool,
        out: &mut Vec<Activation>,
    ) {
        if !self.ore.has_attribute(attribute) {
            debug!(source = %source, %attribute, "nothing to remove");
            return;
        }

        for _ in 0..amount {
            if !self.ore.remove_first(attribute) {
                break;
            }
            if !is_reaction {
                let removed = Activation::attribute_removed()
                    .with_attribute(attribute)
                    .with_source(source.clone());
                out.push(self.emit(removed));
            }
        }
        debug!(
            source = %source,
            %attribute,
            reaction = is_reaction,
            attributes = %self.ore.attribute_list(),
            "attribute removed"
        );
    }

    fn apply_reaction(&mut self, resident: Attribute, incoming: Attribute, source: &CardRef) {
        let Some(reaction) = resident.reaction(incoming) else {
            return;
        };
        debug!(source = %source, %reaction, %resident, %incoming, "reaction");

        let event = self.emit(
            Activation::reaction_triggered()
                .with_reaction(reaction)
                .with_reaction_attributes([resident, incoming])
                .with_source(source.clone()),
        );
        CascadeResolver::handle_new_triggers(self, vec![event]);
    }
}
