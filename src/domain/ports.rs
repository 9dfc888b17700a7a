/// Supplies the values the driver wires into the object graph.
pub trait ScenarioProvider {
    fn client_name(&self) -> &str;
    fn client_age(&self) -> i32;
    fn client_weight(&self) -> f64;
    /// `None` leaves the client without a city.
    fn city_name(&self) -> Option<&str>;
    fn pokemon_names(&self) -> Vec<&str>;
}
