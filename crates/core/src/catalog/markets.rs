//! Compiled-in market tables: brand line-ups and segment price bands for each
//! supported market, in the market's own currency.

pub(crate) struct MarketTable {
    pub name: &'static str,
    pub currency: &'static str,
    pub models: &'static [(&'static str, &'static [&'static str])],
    pub bands: &'static [(&'static str, u64, u64)],
    pub region_pricing: Option<RegionPricingTable>,
    pub advisory: Option<&'static str>,
}

pub(crate) struct RegionPricingTable {
    /// Decimal mantissa and scale.
    pub multiplier: (i64, u32),
    pub currency_markers: &'static [&'static str],
    pub rounding_unit: u64,
}

const TURKEY_ADVISORY: &str = "Only recommend models commonly sold in Turkey with official \
dealership networks. Popular brands: Toyota, Honda, Hyundai, Kia, Volkswagen, Skoda, Renault, \
Fiat, Ford, Mercedes, BMW, Audi. Avoid rare or US-spec models such as Genesis, Infiniti, \
Cadillac, Chrysler and Dodge. Turkish buyers value fuel efficiency, low maintenance costs and \
resale value.";

pub(crate) const MARKETS: &[MarketTable] = &[TURKEY, USA, GERMANY, UK, JAPAN, UAE];

const TURKEY: MarketTable = MarketTable {
    name: "Turkey",
    currency: "TRY",
    models: &[
        ("Fiat", &["Egea", "Egea Cross", "500", "500X", "Tipo", "Doblo"]),
        ("Dacia", &["Sandero", "Sandero Stepway", "Duster", "Jogger"]),
        ("Renault", &["Clio", "Megane", "Taliant", "Austral", "Captur"]),
        ("Opel", &["Corsa", "Astra", "Crossland", "Grandland", "Mokka"]),
        ("Citroën", &["C3", "C3 Aircross", "C4", "C5 Aircross", "Berlingo"]),
        ("Toyota", &["Yaris", "Corolla", "Corolla Cross", "C-HR", "RAV4", "Camry", "Hilux"]),
        ("Honda", &["Civic", "CR-V", "HR-V", "Jazz"]),
        ("Hyundai", &["i10", "i20", "i20 N", "Bayon", "Kona", "Tucson", "Santa Fe", "Ioniq 5"]),
        (
            "Kia",
            &[
                "Picanto", "Rio", "Stonic", "Ceed", "XCeed", "Proceed", "Sportage", "Sorento",
                "EV6",
            ],
        ),
        ("Nissan", &["Micra", "Juke", "Qashqai", "X-Trail"]),
        ("Mazda", &["2", "3", "CX-5", "CX-60", "MX-5"]),
        ("Ford", &["Puma", "Kuga", "Mustang Mach-E"]),
        ("Suzuki", &["Swift", "Vitara", "S-Cross", "Jimny"]),
        ("Peugeot", &["208", "2008", "308", "3008", "408", "5008", "e-2008", "e-308"]),
        (
            "Volkswagen",
            &[
                "Polo", "Taigo", "T-Cross", "T-Roc", "Tiguan", "Tiguan Allspace", "Passat",
                "Arteon", "ID.4", "ID.5", "ID.Buzz",
            ],
        ),
        ("Skoda", &["Fabia", "Scala", "Kamiq", "Karoq", "Kodiaq", "Octavia", "Superb", "Enyaq"]),
        ("SEAT", &["Ibiza", "Arona", "Leon", "Ateca", "Tarraco"]),
        ("Cupra", &["Formentor", "Leon", "Ateca"]),
        ("Volvo", &["XC40", "XC60", "XC90", "S60", "S90", "C40", "EX30"]),
        ("Subaru", &["Outback", "Forester", "XV"]),
        (
            "BMW",
            &[
                "1 Series", "2 Series", "2 Series Gran Coupe", "3 Series", "4 Series", "5 Series",
                "7 Series", "8 Series", "X1", "X2", "X3", "X4", "X5", "X6", "X7", "iX", "iX1",
                "iX3", "i4", "i5", "i7",
            ],
        ),
        (
            "Mercedes-Benz",
            &[
                "A-Class", "C-Class", "E-Class", "S-Class", "CLA", "CLS", "GLA", "GLB", "GLC",
                "GLE", "GLS", "EQA", "EQB", "EQC", "EQE", "EQS",
            ],
        ),
        (
            "Audi",
            &[
                "A1", "A3", "A4", "A5", "A6", "A7", "A8", "Q2", "Q3", "Q4 e-tron", "Q5", "Q7", "Q8",
                "e-tron", "e-tron GT",
            ],
        ),
        ("Lexus", &["UX", "NX", "RX", "ES", "LS"]),
        ("Alfa Romeo", &["Tonale", "Giulia", "Stelvio"]),
        ("DS", &["DS 3", "DS 4", "DS 7"]),
        ("Genesis", &["GV70", "GV80", "G70", "G80"]),
        ("Mini", &["Cooper", "Cooper S", "Countryman", "Clubman"]),
        (
            "Porsche",
            &[
                "718 Cayman", "718 Boxster", "911", "Taycan", "Macan", "Cayenne", "Panamera",
            ],
        ),
        ("Range Rover", &["Evoque", "Velar", "Sport", "Range Rover"]),
        ("Land Rover", &["Defender", "Discovery", "Discovery Sport"]),
        ("Jaguar", &["E-Pace", "F-Pace", "I-Pace", "F-Type"]),
        ("Maserati", &["Ghibli", "Levante", "Quattroporte", "Grecale"]),
        ("Bentley", &["Bentayga", "Flying Spur", "Continental GT"]),
        ("Lamborghini", &["Urus", "Huracán", "Revuelto"]),
        ("Ferrari", &["Roma", "Portofino", "296 GTB", "SF90", "Purosangue"]),
        ("Rolls-Royce", &["Ghost", "Cullinan", "Phantom"]),
        ("Tesla", &["Model 3", "Model Y"]),
        ("MG", &["4", "5", "ZS EV", "MG4 Electric"]),
        ("BYD", &["Atto 3", "Seal", "Dolphin", "Han"]),
        ("Togg", &["T10X"]),
        ("Polestar", &["2", "3"]),
    ],
    bands: &[
        ("Budget", 600_000, 1_300_000),
        ("Mainstream", 1_000_000, 2_500_000),
        ("Upper-Mainstream", 1_500_000, 3_500_000),
        ("Premium", 2_500_000, 6_000_000),
        ("Ultra-Luxury", 5_000_000, 30_000_000),
        ("Electric", 1_200_000, 5_000_000),
    ],
    region_pricing: Some(RegionPricingTable {
        multiplier: (125, 2),
        currency_markers: &["TRY", "TL", "₺"],
        rounding_unit: 100_000,
    }),
    advisory: Some(TURKEY_ADVISORY),
};

const USA: MarketTable = MarketTable {
    name: "USA",
    currency: "USD",
    models: &[
        ("Chevrolet", &["Spark", "Trax", "Trailblazer"]),
        ("Nissan", &["Versa", "Sentra", "Kicks"]),
        ("Hyundai", &["Accent", "Venue"]),
        ("Kia", &["Rio", "Soul"]),
        ("Mitsubishi", &["Mirage"]),
        (
            "Toyota",
            &[
                "Corolla", "Camry", "RAV4", "Highlander", "4Runner", "Tacoma", "Tundra", "Sienna",
                "Prius",
            ],
        ),
        (
            "Honda",
            &[
                "Civic", "Accord", "CR-V", "Pilot", "HR-V", "Passport", "Ridgeline", "Odyssey",
            ],
        ),
        ("Mazda", &["Mazda3", "Mazda6", "CX-30", "CX-5", "CX-50", "CX-9", "MX-5 Miata"]),
        (
            "Subaru",
            &[
                "Impreza", "Legacy", "Outback", "Forester", "Crosstrek", "Ascent", "WRX", "BRZ",
            ],
        ),
        (
            "Volkswagen",
            &[
                "Jetta", "Passat", "Tiguan", "Atlas", "Atlas Cross Sport", "Taos", "ID.4",
            ],
        ),
        (
            "Chevrolet",
            &[
                "Malibu", "Equinox", "Blazer", "Traverse", "Tahoe", "Suburban", "Silverado",
                "Colorado",
            ],
        ),
        (
            "Ford",
            &[
                "Maverick", "Escape", "Edge", "Explorer", "Expedition", "F-150", "Ranger", "Bronco",
                "Bronco Sport", "Mustang",
            ],
        ),
        (
            "Jeep",
            &[
                "Compass", "Cherokee", "Grand Cherokee", "Wrangler", "Gladiator", "Wagoneer",
                "Grand Wagoneer",
            ],
        ),
        ("Ram", &["1500", "2500", "3500"]),
        ("GMC", &["Terrain", "Acadia", "Yukon", "Sierra"]),
        ("Dodge", &["Hornet", "Durango", "Charger", "Challenger"]),
        ("Acura", &["Integra", "TLX", "MDX", "RDX"]),
        ("Infiniti", &["Q50", "QX50", "QX55", "QX60", "QX80"]),
        ("Lexus", &["IS", "ES", "LS", "UX", "NX", "RX", "GX", "LX", "LC"]),
        ("Genesis", &["G70", "G80", "G90", "GV60", "GV70", "GV80"]),
        (
            "BMW",
            &[
                "2 Series", "3 Series", "4 Series", "5 Series", "7 Series", "8 Series", "X1", "X2",
                "X3", "X4", "X5", "X6", "X7", "iX", "i4", "i7",
            ],
        ),
        (
            "Mercedes-Benz",
            &[
                "A-Class", "C-Class", "E-Class", "S-Class", "CLA", "CLS", "GLA", "GLB", "GLC",
                "GLE", "GLS", "G-Class", "EQS", "EQE",
            ],
        ),
        (
            "Audi",
            &[
                "A3", "A4", "A5", "A6", "A7", "A8", "Q3", "Q4 e-tron", "Q5", "Q7", "Q8", "e-tron",
                "e-tron GT", "RS e-tron GT",
            ],
        ),
        ("Cadillac", &["CT4", "CT5", "XT4", "XT5", "XT6", "Escalade", "Lyriq"]),
        ("Lincoln", &["Corsair", "Nautilus", "Aviator", "Navigator"]),
        ("Volvo", &["S60", "S90", "V60", "V90", "XC40", "XC60", "XC90", "C40"]),
        ("Alfa Romeo", &["Giulia", "Stelvio", "Tonale"]),
        (
            "Porsche",
            &[
                "718 Cayman", "718 Boxster", "911", "Taycan", "Macan", "Cayenne", "Panamera",
            ],
        ),
        ("Maserati", &["Ghibli", "Levante", "Quattroporte", "Grecale", "MC20"]),
        ("Bentley", &["Bentayga", "Flying Spur", "Continental GT"]),
        ("Lamborghini", &["Urus", "Huracán", "Revuelto"]),
        ("Ferrari", &["Roma", "Portofino", "296 GTB", "SF90", "Purosangue", "812"]),
        ("Rolls-Royce", &["Ghost", "Cullinan", "Phantom", "Spectre"]),
        ("Aston Martin", &["Vantage", "DB12", "DBX"]),
        ("McLaren", &["Artura", "GT", "720S"]),
        ("Tesla", &["Model 3", "Model S", "Model X", "Model Y"]),
        ("Rivian", &["R1T", "R1S"]),
        ("Lucid", &["Air"]),
        ("Polestar", &["2", "3"]),
        ("Fisker", &["Ocean"]),
        ("Chevrolet", &["Bolt EV", "Bolt EUV", "Blazer EV", "Equinox EV", "Silverado EV"]),
        ("Ford", &["Mustang Mach-E", "F-150 Lightning"]),
        ("Hyundai", &["Ioniq 5", "Ioniq 6"]),
        ("Kia", &["EV6", "EV9", "Niro EV"]),
    ],
    bands: &[
        ("Budget", 15_000, 25_000),
        ("Mainstream", 25_000, 50_000),
        ("Upper-Mainstream", 40_000, 65_000),
        ("Premium", 50_000, 100_000),
        ("Ultra-Luxury", 100_000, 500_000),
        ("Electric", 35_000, 120_000),
    ],
    region_pricing: None,
    advisory: None,
};

const GERMANY: MarketTable = MarketTable {
    name: "Germany",
    currency: "EUR",
    models: &[
        ("Dacia", &["Sandero", "Duster", "Jogger", "Spring"]),
        ("Fiat", &["500", "Panda", "Tipo"]),
        ("Citroën", &["C3", "C3 Aircross"]),
        ("Opel", &["Corsa", "Astra", "Crossland", "Mokka"]),
        ("Renault", &["Clio", "Captur", "Arkana"]),
        (
            "Volkswagen",
            &[
                "Polo", "Golf", "T-Cross", "T-Roc", "Taigo", "Tiguan", "Passat", "Arteon", "ID.3",
                "ID.4", "ID.5", "ID.7", "ID.Buzz",
            ],
        ),
        ("Skoda", &["Fabia", "Scala", "Kamiq", "Karoq", "Kodiaq", "Octavia", "Superb", "Enyaq"]),
        ("SEAT", &["Ibiza", "Arona", "Leon", "Ateca", "Tarraco"]),
        ("Cupra", &["Born", "Formentor", "Leon", "Ateca"]),
        ("Audi", &["A1", "A3", "Q2", "Q3"]),
        ("Ford", &["Fiesta", "Focus", "Puma", "Kuga", "Mustang Mach-E"]),
        ("Toyota", &["Yaris", "Corolla", "C-HR", "RAV4", "Highlander", "bZ4X"]),
        ("Hyundai", &["i10", "i20", "i30", "Bayon", "Kona", "Tucson", "Ioniq 5", "Ioniq 6"]),
        (
            "Kia",
            &[
                "Picanto", "Rio", "Stonic", "Ceed", "XCeed", "Sportage", "Sorento", "EV6", "EV9",
                "Niro",
            ],
        ),
        ("Peugeot", &["208", "2008", "308", "3008", "408", "5008", "e-208", "e-2008"]),
        ("Nissan", &["Juke", "Qashqai", "X-Trail", "Ariya"]),
        ("Mazda", &["2", "3", "CX-5", "CX-60", "MX-5", "MX-30"]),
        (
            "BMW",
            &[
                "1 Series", "2 Series", "3 Series", "4 Series", "5 Series", "7 Series", "8 Series",
                "X1", "X2", "X3", "X4", "X5", "X6", "X7", "iX1", "iX3", "i4", "i5", "i7", "iX",
            ],
        ),
        (
            "Mercedes-Benz",
            &[
                "A-Class", "C-Class", "E-Class", "S-Class", "CLA", "CLS", "GLA", "GLB", "GLC",
                "GLE", "GLS", "G-Class", "EQA", "EQB", "EQC", "EQE", "EQS",
            ],
        ),
        (
            "Audi",
            &[
                "A4", "A5", "A6", "A7", "A8", "Q4 e-tron", "Q5", "Q7", "Q8", "e-tron", "e-tron GT",
            ],
        ),
        ("Volvo", &["S60", "S90", "V60", "V90", "XC40", "XC60", "XC90", "C40", "EX30", "EX90"]),
        ("Mini", &["Cooper", "Countryman", "Clubman", "Electric"]),
        ("Alfa Romeo", &["Giulia", "Stelvio", "Tonale"]),
        (
            "Porsche",
            &[
                "718 Cayman", "718 Boxster", "911", "Taycan", "Macan", "Cayenne", "Panamera",
            ],
        ),
        ("Maserati", &["Ghibli", "Levante", "Quattroporte", "Grecale", "MC20"]),
        ("Bentley", &["Bentayga", "Flying Spur", "Continental GT"]),
        ("Lamborghini", &["Urus", "Huracán", "Revuelto"]),
        ("Ferrari", &["Roma", "Portofino", "296 GTB", "SF90", "Purosangue"]),
        ("Rolls-Royce", &["Ghost", "Cullinan", "Phantom", "Spectre"]),
        ("Tesla", &["Model 3", "Model Y", "Model S", "Model X"]),
        ("Polestar", &["2", "3", "4"]),
        ("Smart", &["#1", "#3"]),
        ("BYD", &["Atto 3", "Seal", "Dolphin", "Han"]),
    ],
    bands: &[
        ("Budget", 12_000, 25_000),
        ("Mainstream", 25_000, 50_000),
        ("Upper-Mainstream", 35_000, 65_000),
        ("Premium", 50_000, 100_000),
        ("Ultra-Luxury", 100_000, 400_000),
        ("Electric", 30_000, 90_000),
    ],
    region_pricing: None,
    advisory: None,
};

const UK: MarketTable = MarketTable {
    name: "UK",
    currency: "GBP",
    models: &[
        ("Dacia", &["Sandero", "Duster", "Jogger", "Spring"]),
        ("Fiat", &["500", "Panda", "Tipo"]),
        ("Vauxhall", &["Corsa", "Astra", "Crossland", "Mokka", "Grandland"]),
        ("Citroën", &["C3", "C3 Aircross", "C4"]),
        ("Renault", &["Clio", "Captur", "Arkana", "Austral"]),
        ("Ford", &["Fiesta", "Focus", "Puma", "Kuga", "Mustang", "Mustang Mach-E"]),
        ("Toyota", &["Aygo X", "Yaris", "Corolla", "C-HR", "RAV4", "Highlander", "bZ4X"]),
        ("Honda", &["Jazz", "Civic", "CR-V", "HR-V", "e:Ny1"]),
        (
            "Hyundai",
            &[
                "i10", "i20", "i30", "Bayon", "Kona", "Tucson", "Santa Fe", "Ioniq 5", "Ioniq 6",
            ],
        ),
        (
            "Kia",
            &[
                "Picanto", "Rio", "Stonic", "Ceed", "XCeed", "Sportage", "Sorento", "EV6", "EV9",
                "Niro",
            ],
        ),
        ("Nissan", &["Micra", "Juke", "Qashqai", "X-Trail", "Ariya"]),
        ("Mazda", &["2", "3", "CX-5", "CX-60", "MX-5", "MX-30"]),
        ("Peugeot", &["108", "208", "2008", "308", "3008", "5008", "e-208", "e-2008"]),
        (
            "Volkswagen",
            &[
                "Polo", "Golf", "T-Cross", "T-Roc", "Tiguan", "ID.3", "ID.4", "ID.5", "ID.Buzz",
            ],
        ),
        ("Skoda", &["Fabia", "Scala", "Kamiq", "Karoq", "Kodiaq", "Octavia", "Superb", "Enyaq"]),
        (
            "BMW",
            &[
                "1 Series", "2 Series", "3 Series", "4 Series", "5 Series", "7 Series", "X1", "X2",
                "X3", "X4", "X5", "X7", "iX", "i4", "i5",
            ],
        ),
        (
            "Mercedes-Benz",
            &[
                "A-Class", "C-Class", "E-Class", "S-Class", "GLA", "GLB", "GLC", "GLE", "EQA",
                "EQB", "EQC", "EQE", "EQS",
            ],
        ),
        (
            "Audi",
            &[
                "A1", "A3", "A4", "A5", "A6", "Q2", "Q3", "Q4 e-tron", "Q5", "Q7", "Q8", "e-tron",
            ],
        ),
        ("Volvo", &["S60", "S90", "V60", "V90", "XC40", "XC60", "XC90", "C40", "EX30", "EX90"]),
        ("Lexus", &["UX", "NX", "RX", "ES"]),
        ("Mini", &["Cooper", "Countryman", "Clubman", "Electric"]),
        ("Range Rover", &["Evoque", "Velar", "Sport", "Range Rover"]),
        ("Land Rover", &["Defender", "Discovery", "Discovery Sport"]),
        ("Jaguar", &["E-Pace", "F-Pace", "I-Pace", "F-Type"]),
        ("Porsche", &["718", "911", "Taycan", "Macan", "Cayenne", "Panamera"]),
        ("Bentley", &["Bentayga", "Flying Spur", "Continental GT"]),
        ("Rolls-Royce", &["Ghost", "Cullinan", "Phantom", "Spectre"]),
        ("Aston Martin", &["Vantage", "DB12", "DBX"]),
        ("Tesla", &["Model 3", "Model Y", "Model S", "Model X"]),
        ("MG", &["3", "4", "5", "HS", "ZS EV", "MG4 Electric"]),
        ("Polestar", &["2", "3", "4"]),
        ("BYD", &["Atto 3", "Seal", "Dolphin"]),
    ],
    bands: &[
        ("Budget", 12_000, 22_000),
        ("Mainstream", 20_000, 40_000),
        ("Upper-Mainstream", 30_000, 55_000),
        ("Premium", 45_000, 90_000),
        ("Ultra-Luxury", 85_000, 300_000),
        ("Electric", 25_000, 80_000),
    ],
    region_pricing: None,
    advisory: None,
};

const JAPAN: MarketTable = MarketTable {
    name: "Japan",
    currency: "JPY",
    models: &[
        ("Suzuki", &["Alto", "Wagon R", "Swift", "Solio", "Hustler", "Spacia", "Jimny"]),
        ("Daihatsu", &["Mira", "Move", "Tanto", "Taft", "Rocky", "Thor"]),
        ("Nissan", &["Dayz", "Roox", "Sakura"]),
        ("Honda", &["N-BOX", "N-WGN", "N-ONE"]),
        (
            "Toyota",
            &[
                "Yaris", "Aqua", "Corolla", "Crown", "Prius", "Camry", "Noah", "Voxy", "Alphard",
                "Vellfire", "Sienta", "C-HR", "RAV4", "Harrier", "Land Cruiser", "bZ4X",
            ],
        ),
        ("Honda", &["Fit", "Civic", "Accord", "Vezel", "CR-V", "Freed", "Stepwgn", "Odyssey"]),
        ("Nissan", &["Note", "Serena", "X-Trail", "Skyline", "Fuga", "Elgrand", "Ariya"]),
        (
            "Mazda",
            &[
                "Mazda2", "Mazda3", "Mazda6", "CX-3", "CX-5", "CX-8", "CX-60", "MX-5", "MX-30",
            ],
        ),
        (
            "Subaru",
            &[
                "Impreza", "Levorg", "WRX", "Forester", "Outback", "Crosstrek", "BRZ", "Solterra",
            ],
        ),
        ("Mitsubishi", &["eK", "Delica D:5", "Outlander", "Eclipse Cross"]),
        ("Lexus", &["UX", "NX", "RX", "LX", "ES", "IS", "LS", "LC", "RZ"]),
        (
            "BMW",
            &[
                "1 Series", "2 Series", "3 Series", "4 Series", "5 Series", "7 Series", "X1", "X2",
                "X3", "X4", "X5", "X6", "X7", "iX", "i4",
            ],
        ),
        (
            "Mercedes-Benz",
            &[
                "A-Class", "C-Class", "E-Class", "S-Class", "GLA", "GLB", "GLC", "GLE", "GLS",
                "EQA", "EQB", "EQC", "EQE", "EQS",
            ],
        ),
        (
            "Audi",
            &[
                "A1", "A3", "A4", "A5", "A6", "A7", "A8", "Q2", "Q3", "Q4 e-tron", "Q5", "Q7", "Q8",
                "e-tron",
            ],
        ),
        ("Volvo", &["XC40", "XC60", "XC90", "S60", "S90", "V60", "V90", "C40"]),
        ("Mini", &["Cooper", "Countryman", "Clubman"]),
        ("Porsche", &["718", "911", "Taycan", "Macan", "Cayenne", "Panamera"]),
        ("Maserati", &["Ghibli", "Levante", "Quattroporte", "Grecale"]),
        ("Bentley", &["Bentayga", "Flying Spur", "Continental GT"]),
        ("Lamborghini", &["Urus", "Huracán", "Revuelto"]),
        ("Ferrari", &["Roma", "Portofino", "296 GTB", "SF90", "Purosangue"]),
        ("Rolls-Royce", &["Ghost", "Cullinan", "Phantom"]),
        ("Tesla", &["Model 3", "Model Y", "Model S", "Model X"]),
        ("Nissan", &["Leaf", "Ariya"]),
        ("BYD", &["Atto 3", "Seal", "Dolphin"]),
    ],
    bands: &[
        ("Budget", 1_000_000, 2_500_000),
        ("Mainstream", 2_000_000, 4_500_000),
        ("Upper-Mainstream", 3_500_000, 6_500_000),
        ("Premium", 5_000_000, 12_000_000),
        ("Ultra-Luxury", 10_000_000, 50_000_000),
        ("Electric", 3_000_000, 9_000_000),
    ],
    region_pricing: None,
    advisory: None,
};

const UAE: MarketTable = MarketTable {
    name: "UAE",
    currency: "AED",
    models: &[
        ("Nissan", &["Sunny", "Sentra"]),
        ("Hyundai", &["Accent", "Elantra"]),
        ("Kia", &["Pegas", "Cerato"]),
        ("Mitsubishi", &["Attrage", "Mirage"]),
        (
            "Toyota",
            &[
                "Yaris", "Corolla", "Camry", "Avalon", "RAV4", "Fortuner", "Land Cruiser", "Prado",
                "Hilux",
            ],
        ),
        ("Honda", &["City", "Civic", "Accord", "CR-V", "Pilot", "HR-V"]),
        ("Hyundai", &["i10", "i20", "Bayon", "Kona", "Tucson", "Santa Fe", "Palisade", "Ioniq 5"]),
        ("Kia", &["Rio", "K5", "Stonic", "Sportage", "Sorento", "Telluride", "Carnival", "EV6"]),
        ("Nissan", &["Kicks", "Altima", "Maxima", "X-Trail", "Pathfinder", "Patrol", "Armada"]),
        ("Mazda", &["2", "3", "6", "CX-3", "CX-5", "CX-9", "CX-90"]),
        (
            "Ford",
            &[
                "EcoSport", "Escape", "Edge", "Explorer", "Expedition", "F-150", "Ranger", "Bronco",
            ],
        ),
        (
            "Chevrolet",
            &[
                "Spark", "Malibu", "Camaro", "Equinox", "Blazer", "Tahoe", "Suburban", "Silverado",
            ],
        ),
        ("GMC", &["Terrain", "Acadia", "Yukon", "Sierra"]),
        ("Jeep", &["Renegade", "Compass", "Cherokee", "Grand Cherokee", "Wrangler", "Gladiator"]),
        ("Lexus", &["ES", "IS", "LS", "UX", "NX", "RX", "GX", "LX"]),
        ("Infiniti", &["Q50", "QX50", "QX55", "QX60", "QX80"]),
        ("Genesis", &["G70", "G80", "G90", "GV60", "GV70", "GV80"]),
        (
            "BMW",
            &[
                "2 Series", "3 Series", "4 Series", "5 Series", "7 Series", "8 Series", "X1", "X2",
                "X3", "X4", "X5", "X6", "X7", "iX", "i4", "i5", "i7",
            ],
        ),
        (
            "Mercedes-Benz",
            &[
                "A-Class", "C-Class", "E-Class", "S-Class", "CLA", "CLS", "GLA", "GLB", "GLC",
                "GLE", "GLS", "G-Class", "AMG GT", "EQB", "EQC", "EQE", "EQS",
            ],
        ),
        (
            "Audi",
            &[
                "A3", "A4", "A5", "A6", "A7", "A8", "Q3", "Q4 e-tron", "Q5", "Q7", "Q8", "e-tron",
                "e-tron GT", "RS e-tron GT",
            ],
        ),
        ("Volvo", &["S60", "S90", "XC40", "XC60", "XC90", "C40"]),
        ("Land Rover", &["Discovery Sport", "Discovery", "Defender"]),
        ("Cadillac", &["CT4", "CT5", "XT4", "XT5", "XT6", "Escalade"]),
        ("Range Rover", &["Evoque", "Velar", "Sport", "Range Rover"]),
        (
            "Porsche",
            &[
                "718 Cayman", "718 Boxster", "911", "Taycan", "Macan", "Cayenne", "Panamera",
            ],
        ),
        ("Maserati", &["Ghibli", "Levante", "Quattroporte", "Grecale", "MC20"]),
        ("Bentley", &["Bentayga", "Flying Spur", "Continental GT"]),
        ("Lamborghini", &["Urus", "Huracán", "Revuelto"]),
        ("Ferrari", &["Roma", "Portofino", "296 GTB", "SF90", "Purosangue", "812"]),
        ("Rolls-Royce", &["Ghost", "Cullinan", "Phantom", "Spectre"]),
        ("Aston Martin", &["Vantage", "DB12", "DBX"]),
        ("McLaren", &["Artura", "GT", "720S"]),
        ("Bugatti", &["Chiron"]),
        ("Tesla", &["Model 3", "Model S", "Model X", "Model Y"]),
        ("Lucid", &["Air"]),
        ("Polestar", &["2", "3"]),
        ("BYD", &["Atto 3", "Seal", "Dolphin", "Han"]),
        ("MG", &["ZS EV", "4 Electric"]),
    ],
    bands: &[
        ("Budget", 40_000, 85_000),
        ("Mainstream", 75_000, 180_000),
        ("Upper-Mainstream", 130_000, 250_000),
        ("Premium", 200_000, 450_000),
        ("Ultra-Luxury", 400_000, 3_000_000),
        ("Electric", 120_000, 500_000),
    ],
    region_pricing: None,
    advisory: None,
};
