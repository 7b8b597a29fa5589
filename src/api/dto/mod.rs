pub mod weather_query_dto;
