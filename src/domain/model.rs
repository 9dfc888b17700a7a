use serde::{Deserialize, Serialize};
use std::rc::Rc;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct City {
    name: String,
}

impl City {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pokemon {
    name: String,
}

impl Pokemon {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }
}

/// A client with an associated city and the pokemon it owns.
///
/// Setters accept any value. The city is shared with whoever created it;
/// the pokemon list belongs to the client and is appended to from outside
/// through [`Client::pokemon_list_mut`].
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Client {
    name: String,
    age: i32,
    weight: f64,
    city: Option<Rc<City>>,
    pokemon_list: Vec<Pokemon>,
}

impl Client {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn age(&self) -> i32 {
        self.age
    }

    pub fn set_age(&mut self, age: i32) {
        self.age = age;
    }

    pub fn weight(&self) -> f64 {
        self.weight
    }

    pub fn set_weight(&mut self, weight: f64) {
        self.weight = weight;
    }

    pub fn city(&self) -> Option<&Rc<City>> {
        self.city.as_ref()
    }

    /// Replaces any previously assigned city.
    pub fn set_city(&mut self, city: Rc<City>) {
        self.city = Some(city);
    }

    pub fn clear_city(&mut self) {
        self.city = None;
    }

    pub fn pokemon_list(&self) -> &[Pokemon] {
        &self.pokemon_list
    }

    pub fn pokemon_list_mut(&mut self) -> &mut Vec<Pokemon> {
        &mut self.pokemon_list
    }
}
