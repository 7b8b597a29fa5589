pub mod weather_routes;
