pub mod http_geo_client;
