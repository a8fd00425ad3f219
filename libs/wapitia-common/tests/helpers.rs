#![allow(clippy::unwrap_used, clippy::expect_used)]

use std::collections::HashMap;

use wapitia_common::basictype::{BasicTypeError, new_color, new_coordinate};
use wapitia_common::collections::{add_to_map_of_lists, as_singleton, get_or_make};
use wapitia_common::iter::zip;
use wapitia_common::strings::{leftmost, rightmost};
use wapitia_common::{Attr, BufferedIterator, CAttr, ConcreteAttr, Pair, Tuple3};

#[derive(Debug, Default)]
struct Profile {
    nickname: Option<String>,
}

fn nickname_attr() -> Attr<Profile, String> {
    Attr::of(
        |p: &Profile| p.nickname.clone(),
        |p: &mut Profile, v| p.nickname = Some(v),
    )
}

#[test]
fn groups_values_and_extracts_singletons() {
    let mut by_len: HashMap<usize, Vec<&str>> = HashMap::new();
    for word in ["elk", "moose", "deer", "roe", "bison"] {
        add_to_map_of_lists(&mut by_len, word.len(), word);
    }

    assert_eq!(by_len[&3], vec!["elk", "roe"]);
    assert_eq!(as_singleton(&by_len[&4]).unwrap(), Some(&"deer"));
    let err = as_singleton(&by_len[&5]).unwrap_err();
    assert_eq!(err.message(), "List has multiple elements.");
}

#[test]
fn attr_backed_get_or_make() {
    let mut profile = Profile::default();

    {
        let mut bound = ConcreteAttr::new(&mut profile, nickname_attr());
        let made = get_or_make(&mut bound, || "wapiti".to_owned());
        assert_eq!(made, "wapiti");
        let kept = get_or_make(&mut bound, || "unused".to_owned());
        assert_eq!(kept, "wapiti");

        bound.set("stag".to_owned());
        assert_eq!(bound.get().as_deref(), Some("stag"));
    }

    assert_eq!(profile.nickname.as_deref(), Some("stag"));
}

#[test]
fn buffered_zip_of_tuples() {
    let names = ["red", "green", "blue"];
    let values = [new_color(255, 0, 0), new_color(0, 255, 0), new_color(0, 0, 255)];

    let mut it = BufferedIterator::new(zip(names, values));
    assert_eq!(it.peek().map(Pair::first), Some(&"red"));

    let collected: Vec<Tuple3<&str, u8, u8>> = it
        .by_ref()
        .map(|p| {
            let (name, c) = p.into_inner();
            Tuple3::of(name, c.r, c.b)
        })
        .collect();
    assert_eq!(collected.len(), 3);
    assert_eq!(collected[2], Tuple3::of("blue", 0, 255));
    assert!(!it.has_next());
}

#[test]
fn truncation_and_validation() {
    assert_eq!(leftmost(4, Some("Cervus canadensis")), Some("Cerv"));
    assert_eq!(rightmost(10, Some("Cervus canadensis")), Some("canadensis"));

    assert!(new_coordinate(44.4, -110.6).is_ok());
    assert_eq!(
        new_coordinate(-90.01, 0.0).unwrap_err(),
        BasicTypeError::LatitudeOutOfRange(-90.01)
    );
}
