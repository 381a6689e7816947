mod declaration_tests;
