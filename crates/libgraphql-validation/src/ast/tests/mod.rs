mod object_field_scanner_tests;
