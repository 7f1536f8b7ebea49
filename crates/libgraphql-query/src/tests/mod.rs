mod graphql_parse_error_tests;
mod graphql_parser_error_tests;
mod graphql_parser_fragment_tests;
mod graphql_parser_property_tests;
mod utils;
