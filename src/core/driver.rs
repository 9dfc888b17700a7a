use crate::core::{City, Client, Pokemon, ScenarioProvider};
use std::rc::Rc;

/// Builds the client object graph from a scenario in a fixed order:
/// client scalars, then the city, then each pokemon as listed.
pub struct Driver<P: ScenarioProvider> {
    scenario: P,
}

impl<P: ScenarioProvider> Driver<P> {
    pub fn new(scenario: P) -> Self {
        Self { scenario }
    }

    pub fn run(&self) -> Client {
        let mut client = Client::new();
        client.set_name(self.scenario.client_name());
        client.set_age(self.scenario.client_age());
        client.set_weight(self.scenario.client_weight());
        tracing::debug!(
            name = client.name(),
            age = client.age(),
            weight = client.weight(),
            "Client created"
        );

        if let Some(city_name) = self.scenario.city_name() {
            let city = Rc::new(City::new(city_name));
            client.set_city(city);
            tracing::debug!(city = city_name, "City assigned");
        } else {
            tracing::debug!("Scenario has no city; client left without one");
        }

        let pokemon_list = client.pokemon_list_mut();
        for name in self.scenario.pokemon_names() {
            pokemon_list.push(Pokemon::new(name));
            tracing::debug!(pokemon = name, "Pokemon appended");
        }

        tracing::info!(
            "Wired client '{}' with {} pokemon",
            client.name(),
            client.pokemon_list().len()
        );
        client
    }
}
