mod password_hasher_tests;
