quantity!(Percentage, "%");
