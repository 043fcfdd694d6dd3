use fake::Fake;
use fake::faker::address::{en as address_en, pt_br as address_pt_br};
use fake::faker::lorem::en::Word;
use fake::faker::name::{en as name_en, pt_br as name_pt_br};
use fake::faker::phone_number::{en as phone_en, pt_br as phone_pt_br};
use rand::RngCore;

use crate::synthetic::locales::LocaleKey;

pub fn full_name(locale: LocaleKey, rng: &mut dyn RngCore) -> String {
    match locale {
        LocaleKey::EnUs => name_en::Name().fake_with_rng(rng),
        LocaleKey::PtBr => name_pt_br::Name().fake_with_rng(rng),
    }
}

/// Multi-line postal address in the locale's usual layout.
pub fn postal_address(locale: LocaleKey, rng: &mut dyn RngCore) -> String {
    match locale {
        LocaleKey::EnUs => {
            let number: String = address_en::BuildingNumber().fake_with_rng(rng);
            let street: String = address_en::StreetName().fake_with_rng(rng);
            let city: String = address_en::CityName().fake_with_rng(rng);
            let state: String = address_en::StateAbbr().fake_with_rng(rng);
            let zip: String = address_en::ZipCode().fake_with_rng(rng);
            format!("{number} {street}\n{city}, {state} {zip}")
        }
        LocaleKey::PtBr => {
            let street: String = address_pt_br::StreetName().fake_with_rng(rng);
            let number: String = address_pt_br::BuildingNumber().fake_with_rng(rng);
            let city: String = address_pt_br::CityName().fake_with_rng(rng);
            let state: String = address_pt_br::StateAbbr().fake_with_rng(rng);
            let zip: String = address_pt_br::ZipCode().fake_with_rng(rng);
            format!("{street}, {number}\n{city} - {state}\n{zip}")
        }
    }
}

pub fn phone_number(locale: LocaleKey, rng: &mut dyn RngCore) -> String {
    match locale {
        LocaleKey::EnUs => phone_en::PhoneNumber().fake_with_rng(rng),
        LocaleKey::PtBr => phone_pt_br::PhoneNumber().fake_with_rng(rng),
    }
}

pub fn word(rng: &mut dyn RngCore) -> String {
    Word().fake_with_rng(rng)
}
