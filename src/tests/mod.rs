mod mix_test;
