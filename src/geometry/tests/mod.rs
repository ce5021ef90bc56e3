mod vec;
