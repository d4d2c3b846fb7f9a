// tests/common/mod.rs
//
// In-memory stand-in for the XML API. Responses are keyed by
// "<path>?<k>=<v>&..." exactly as the catalog builds them; anything
// unregistered answers with an empty <items/> document.
//
#![allow(dead_code)]

use std::cell::{Cell, RefCell};
use std::collections::HashMap;

use bgg_scrape::core::{Element, Error, Result, XmlSource};
use bgg_scrape::throttle::Throttle;

const EMPTY: &str = r#"<items total="0" termsofuse="https://boardgamegeek.com/xmlapi/termsofuse"/>"#;

enum Canned {
    Body(String),
    Status(u16),
}

#[derive(Default)]
pub struct FakeApi {
    responses: HashMap<String, Canned>,
    calls: RefCell<Vec<String>>,
}

fn key(path: &[&str], query: &[(&str, String)]) -> String {
    let q: Vec<String> = query.iter().map(|(k, v)| format!("{k}={v}")).collect();
    format!("{}?{}", path.join("/"), q.join("&"))
}

fn search_key(name: &str, exact: bool) -> String {
    format!("search?query={name}&type=boardgame&exact={}", if exact { 1 } else { 0 })
}

/// `(id, name, year)` triples to a search document.
pub fn search_doc(items: &[(&str, &str, Option<i64>)]) -> String {
    let mut s = format!(r#"<items total="{}" termsofuse="x">"#, items.len());
    for (id, name, year) in items {
        s.push_str(&format!(r#"<item type="boardgame" id="{id}"><name type="primary" value="{name}"/>"#));
        if let Some(y) = year {
            s.push_str(&format!(r#"<yearpublished value="{y}"/>"#));
        }
        s.push_str("</item>");
    }
    s.push_str("</items>");
    s
}

pub fn thing_doc(id: &str, name: &str, min: i64, max: i64, time: i64) -> String {
    format!(
        r#"<?xml version="1.0" encoding="utf-8"?>
        <items termsofuse="x">
          <item type="boardgame" id="{id}">
            <thumbnail>https://cf.geekdo-images.com/{id}.jpg</thumbnail>
            <name type="primary" sortindex="1" value="{name}"/>
            <name type="alternate" sortindex="1" value="{name} (alt)"/>
            <yearpublished value="2000"/>
            <minplayers value="{min}"/>
            <maxplayers value="{max}"/>
            <playingtime value="{time}"/>
          </item>
        </items>"#
    )
}

impl FakeApi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn exact(mut self, name: &str, items: &[(&str, &str, Option<i64>)]) -> Self {
        self.responses.insert(search_key(name, true), Canned::Body(search_doc(items)));
        self
    }

    pub fn fuzzy(mut self, name: &str, items: &[(&str, &str, Option<i64>)]) -> Self {
        self.responses.insert(search_key(name, false), Canned::Body(search_doc(items)));
        self
    }

    pub fn exact_status(mut self, name: &str, status: u16) -> Self {
        self.responses.insert(search_key(name, true), Canned::Status(status));
        self
    }

    pub fn exact_body(mut self, name: &str, body: &str) -> Self {
        self.responses.insert(search_key(name, true), Canned::Body(body.to_string()));
        self
    }

    pub fn thing(mut self, id: &str, body: String) -> Self {
        self.responses.insert(format!("thing?id={id}"), Canned::Body(body));
        self
    }

    pub fn thing_status(mut self, id: &str, status: u16) -> Self {
        self.responses.insert(format!("thing?id={id}"), Canned::Status(status));
        self
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }

    pub fn called_fuzzy(&self) -> bool {
        self.calls.borrow().iter().any(|c| c.starts_with("search?") && c.ends_with("exact=0"))
    }
}

impl XmlSource for FakeApi {
    fn fetch(&self, path: &[&str], query: &[(&str, String)]) -> Result<Element> {
        let k = key(path, query);
        self.calls.borrow_mut().push(k.clone());
        match self.responses.get(&k) {
            Some(Canned::Body(body)) => Element::parse(body),
            Some(Canned::Status(status)) => Err(Error::Http { status: *status, url: k }),
            None => Element::parse(EMPTY),
        }
    }
}

/// Zero-delay throttle that counts how often it was asked to pause.
#[derive(Default)]
pub struct CountingPause {
    pub count: Cell<usize>,
}

impl Throttle for CountingPause {
    fn pause(&self) {
        self.count.set(self.count.get() + 1);
    }
}
