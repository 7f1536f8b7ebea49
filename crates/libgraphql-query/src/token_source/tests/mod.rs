mod buf_read_graphql_token_source_position_tests;
