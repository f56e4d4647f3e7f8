mod characters_tests;
