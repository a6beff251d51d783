mod closest_pair_agreement;
