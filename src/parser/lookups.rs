use std::collections::HashMap;

use lazy_static::lazy_static;

use crate::lexer::tokens::TokenKind;

#[derive(PartialEq, PartialOrd, Clone, Copy, Debug)]
pub enum BindingPower {
    Default,
    Additive,
    Multiplicative,
}

lazy_static! {
    // Infix operators only; anything else binds with `Default`
    pub static ref BINDING_POWER_LOOKUP: BPLookup = {
        let mut map = HashMap::new();
        map.insert(TokenKind::Plus, BindingPower::Additive);
        map.insert(TokenKind::Dash, BindingPower::Additive);
        map.insert(TokenKind::Star, BindingPower::Multiplicative);
        map.insert(TokenKind::Slash, BindingPower::Multiplicative);
        map
    };
}

pub fn binding_power(kind: TokenKind) -> BindingPower {
    *BINDING_POWER_LOOKUP.get(&kind).unwrap_or(&BindingPower::Default)
}

pub type BPLookup = HashMap<TokenKind, BindingPower>;
