mod single_test;
