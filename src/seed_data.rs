use crate::catalog::NewPhone;

/// Sample catalog loaded by `advisor-setup`.
pub fn sample_catalog() -> Vec<NewPhone> {
    vec![
        NewPhone {
            model_name: "Samsung Galaxy S24 Ultra".to_string(),
            display: Some("6.8 inches Dynamic AMOLED 2X, 120Hz".to_string()),
            battery: Some("5000 mAh, 45W fast charging".to_string()),
            camera: Some("200MP main, 12MP ultra-wide, 10MP 3x telephoto, 10MP 10x periscope telephoto".to_string()),
            ram: Some("12GB".to_string()),
            storage: Some("256GB / 512GB / 1TB".to_string()),
            price: Some("$1299".to_string()),
            colors: Some("Titanium Black, Titanium Gray, Titanium Violet, Titanium Yellow".to_string()),
        },
        NewPhone {
            model_name: "Samsung Galaxy S24 Plus".to_string(),
            display: Some("6.7 inches Dynamic AMOLED 2X, 120Hz".to_string()),
            battery: Some("4900 mAh, 45W fast charging".to_string()),
            camera: Some("50MP main, 12MP ultra-wide, 10MP 3x telephoto".to_string()),
            ram: Some("12GB".to_string()),
            storage: Some("256GB / 512GB".to_string()),
            price: Some("$999".to_string()),
            colors: Some("Onyx Black, Marble Gray, Cobalt Violet, Amber Yellow".to_string()),
        },
        NewPhone {
            model_name: "Samsung Galaxy S24".to_string(),
            display: Some("6.2 inches Dynamic AMOLED 2X, 120Hz".to_string()),
            battery: Some("4000 mAh, 25W fast charging".to_string()),
            camera: Some("50MP main, 12MP ultra-wide, 10MP 3x telephoto".to_string()),
            ram: Some("8GB / 12GB".to_string()),
            storage: Some("128GB / 256GB".to_string()),
            price: Some("$799".to_string()),
            colors: Some("Onyx Black, Marble Gray, Cobalt Violet, Amber Yellow".to_string()),
        },
        NewPhone {
            model_name: "Samsung Galaxy S23 Ultra".to_string(),
            display: Some("6.8 inches Dynamic AMOLED 2X, 120Hz".to_string()),
            battery: Some("5000 mAh, 45W fast charging".to_string()),
            camera: Some("200MP main, 12MP ultra-wide, 10MP 3x telephoto, 10MP 10x periscope".to_string()),
            ram: Some("8GB / 12GB".to_string()),
            storage: Some("256GB / 512GB / 1TB".to_string()),
            price: Some("$999".to_string()),
            colors: None,
        },
        NewPhone {
            model_name: "Samsung Galaxy S23 Plus".to_string(),
            display: Some("6.6 inches Dynamic AMOLED 2X, 120Hz".to_string()),
            battery: Some("4700 mAh, 45W fast charging".to_string()),
            camera: Some("50MP main, 12MP ultra-wide, 10MP 3x telephoto".to_string()),
            ram: Some("8GB".to_string()),
            storage: Some("256GB / 512GB".to_string()),
            price: Some("$899".to_string()),
            colors: None,
        },
        NewPhone {
            model_name: "Samsung Galaxy S23".to_string(),
            display: Some("6.1 inches Dynamic AMOLED 2X, 120Hz".to_string()),
            battery: Some("3900 mAh, 25W fast charging".to_string()),
            camera: Some("50MP main, 12MP ultra-wide, 10MP 3x telephoto".to_string()),
            ram: Some("8GB".to_string()),
            storage: Some("128GB / 256GB".to_string()),
            price: Some("$799".to_string()),
            colors: None,
        },
        NewPhone {
            model_name: "Samsung Galaxy Z Fold 5".to_string(),
            display: Some("7.6 inches main, 6.2 inches cover, Dynamic AMOLED 2X, 120Hz".to_string()),
            battery: Some("4400 mAh, 25W fast charging".to_string()),
            camera: Some("50MP main, 12MP ultra-wide, 10MP telephoto".to_string()),
            ram: Some("12GB".to_string()),
            storage: Some("256GB / 512GB / 1TB".to_string()),
            price: Some("$1799".to_string()),
            colors: Some("Icy Blue, Phantom Black, Cream".to_string()),
        },
        NewPhone {
            model_name: "Samsung Galaxy Z Flip 5".to_string(),
            display: Some("6.7 inches main, 3.4 inches cover, Dynamic AMOLED 2X, 120Hz".to_string()),
            battery: Some("3700 mAh, 25W fast charging".to_string()),
            camera: Some("12MP main, 12MP ultra-wide".to_string()),
            ram: Some("8GB".to_string()),
            storage: Some("256GB / 512GB".to_string()),
            price: Some("$999".to_string()),
            colors: Some("Mint, Graphite, Cream, Lavender".to_string()),
        },
        NewPhone {
            model_name: "Samsung Galaxy A54 5G".to_string(),
            display: Some("6.4 inches Super AMOLED, 120Hz".to_string()),
            battery: Some("5000 mAh, 25W fast charging".to_string()),
            camera: Some("50MP main, 12MP ultra-wide, 5MP macro".to_string()),
            ram: Some("6GB / 8GB".to_string()),
            storage: Some("128GB / 256GB".to_string()),
            price: Some("$449".to_string()),
            colors: None,
        },
        NewPhone {
            model_name: "Samsung Galaxy A34 5G".to_string(),
            display: Some("6.6 inches Super AMOLED, 120Hz".to_string()),
            battery: Some("5000 mAh, 25W fast charging".to_string()),
            camera: Some("48MP main, 8MP ultra-wide, 5MP macro".to_string()),
            ram: Some("6GB / 8GB".to_string()),
            storage: Some("128GB / 256GB".to_string()),
            price: Some("$349".to_string()),
            colors: None,
        },
        NewPhone {
            model_name: "Samsung Galaxy A15 5G".to_string(),
            display: Some("6.5 inches Super AMOLED, 90Hz".to_string()),
            battery: Some("5000 mAh, 25W fast charging".to_string()),
            camera: Some("50MP main, 5MP ultra-wide, 2MP macro".to_string()),
            ram: Some("4GB / 6GB / 8GB".to_string()),
            storage: Some("128GB".to_string()),
            price: Some("$199".to_string()),
            colors: None,
        },
        NewPhone {
            model_name: "Samsung Galaxy M54 5G".to_string(),
            display: Some("6.7 inches Super AMOLED Plus, 120Hz".to_string()),
            battery: Some("6000 mAh, 25W fast charging".to_string()),
            camera: Some("108MP main, 8MP ultra-wide, 2MP macro".to_string()),
            ram: Some("8GB".to_string()),
            storage: Some("128GB / 256GB".to_string()),
            price: Some("$399".to_string()),
            colors: None,
        },
        NewPhone {
            model_name: "Samsung Galaxy M34 5G".to_string(),
            display: Some("6.5 inches Super AMOLED, 120Hz".to_string()),
            battery: Some("6000 mAh, 25W fast charging".to_string()),
            camera: Some("50MP main, 8MP ultra-wide, 2MP macro".to_string()),
            ram: Some("6GB / 8GB".to_string()),
            storage: Some("128GB".to_string()),
            price: Some("$279".to_string()),
            colors: None,
        },
        NewPhone {
            model_name: "Samsung Galaxy F54 5G".to_string(),
            display: Some("6.7 inches Super AMOLED Plus, 120Hz".to_string()),
            battery: Some("6000 mAh, 25W fast charging".to_string()),
            camera: Some("108MP main, 8MP ultra-wide, 2MP macro".to_string()),
            ram: Some("8GB".to_string()),
            storage: Some("256GB".to_string()),
            price: Some("$369".to_string()),
            colors: None,
        },
        NewPhone {
            model_name: "Samsung Galaxy S21 FE 5G".to_string(),
            display: Some("6.4 inches Dynamic AMOLED 2X, 120Hz".to_string()),
            battery: Some("4500 mAh, 25W fast charging".to_string()),
            camera: Some("12MP main, 12MP ultra-wide, 8MP telephoto".to_string()),
            ram: Some("6GB / 8GB".to_string()),
            storage: Some("128GB / 256GB".to_string()),
            price: Some("$599".to_string()),
            colors: None,
        },
        NewPhone {
            model_name: "Samsung Galaxy Note 20 Ultra".to_string(),
            display: Some("6.9 inches Dynamic AMOLED 2X, 120Hz".to_string()),
            battery: Some("4500 mAh, 25W fast charging".to_string()),
            camera: Some("108MP main, 12MP ultra-wide, 12MP periscope telephoto".to_string()),
            ram: Some("12GB".to_string()),
            storage: Some("128GB / 256GB / 512GB".to_string()),
            price: Some("$849".to_string()),
            colors: None,
        },
        NewPhone {
            model_name: "Samsung Galaxy Z Fold 4".to_string(),
            display: Some("7.6 inches main, 6.2 inches cover, Dynamic AMOLED 2X, 120Hz".to_string()),
            battery: Some("4400 mAh, 25W fast charging".to_string()),
            camera: Some("50MP main, 12MP ultra-wide, 10MP telephoto".to_string()),
            ram: Some("12GB".to_string()),
            storage: Some("256GB / 512GB / 1TB".to_string()),
            price: Some("$1499".to_string()),
            colors: None,
        },
        NewPhone {
            model_name: "Samsung Galaxy Z Flip 4".to_string(),
            display: Some("6.7 inches main, 1.9 inches cover, Dynamic AMOLED, 120Hz".to_string()),
            battery: Some("3700 mAh, 25W fast charging".to_string()),
            camera: Some("12MP main, 12MP ultra-wide".to_string()),
            ram: Some("8GB".to_string()),
            storage: Some("128GB / 256GB / 512GB".to_string()),
            price: Some("$899".to_string()),
            colors: None,
        },
        NewPhone {
            model_name: "Samsung Galaxy A73 5G".to_string(),
            display: Some("6.7 inches Super AMOLED Plus, 120Hz".to_string()),
            battery: Some("5000 mAh, 25W fast charging".to_string()),
            camera: Some("108MP main, 12MP ultra-wide, 5MP macro, 5MP depth".to_string()),
            ram: Some("6GB / 8GB".to_string()),
            storage: Some("128GB / 256GB".to_string()),
            price: Some("$469".to_string()),
            colors: None,
        },
        NewPhone {
            model_name: "Samsung Galaxy A53 5G".to_string(),
            display: Some("6.5 inches Super AMOLED, 120Hz".to_string()),
            battery: Some("5000 mAh, 25W fast charging".to_string()),
            camera: Some("64MP main, 12MP ultra-wide, 5MP macro, 5MP depth".to_string()),
            ram: Some("4GB / 6GB / 8GB".to_string()),
            storage: Some("128GB / 256GB".to_string()),
            price: Some("$349".to_string()),
            colors: None,
        },
        NewPhone {
            model_name: "Samsung Galaxy A14 5G".to_string(),
            display: Some("6.6 inches PLS LCD, 90Hz".to_string()),
            battery: Some("5000 mAh, 15W charging".to_string()),
            camera: Some("50MP main, 2MP macro, 2MP depth".to_string()),
            ram: Some("4GB / 6GB".to_string()),
            storage: Some("64GB / 128GB".to_string()),
            price: Some("$179".to_string()),
            colors: None,
        },
        NewPhone {
            model_name: "Samsung Galaxy M14 5G".to_string(),
            display: Some("6.6 inches PLS LCD, 90Hz".to_string()),
            battery: Some("6000 mAh, 25W fast charging".to_string()),
            camera: Some("50MP main, 2MP macro, 2MP depth".to_string()),
            ram: Some("4GB / 6GB".to_string()),
            storage: Some("64GB / 128GB".to_string()),
            price: Some("$189".to_string()),
            colors: None,
        },
        NewPhone {
            model_name: "Samsung Galaxy F14 5G".to_string(),
            display: Some("6.6 inches PLS LCD, 90Hz".to_string()),
            battery: Some("6000 mAh, 25W fast charging".to_string()),
            camera: Some("50MP main, 2MP macro, 2MP depth".to_string()),
            ram: Some("4GB / 6GB".to_string()),
            storage: Some("64GB / 128GB".to_string()),
            price: Some("$179".to_string()),
            colors: None,
        },
        NewPhone {
            model_name: "Samsung Galaxy S22 Ultra".to_string(),
            display: Some("6.8 inches Dynamic AMOLED 2X, 120Hz".to_string()),
            battery: Some("5000 mAh, 45W fast charging".to_string()),
            camera: Some("108MP main, 12MP ultra-wide, 10MP 3x telephoto, 10MP 10x periscope".to_string()),
            ram: Some("8GB / 12GB".to_string()),
            storage: Some("128GB / 256GB / 512GB / 1TB".to_string()),
            price: Some("$849".to_string()),
            colors: None,
        },
        NewPhone {
            model_name: "Samsung Galaxy S22 Plus".to_string(),
            display: Some("6.6 inches Dynamic AMOLED 2X, 120Hz".to_string()),
            battery: Some("4500 mAh, 45W fast charging".to_string()),
            camera: Some("50MP main, 12MP ultra-wide, 10MP telephoto".to_string()),
            ram: Some("8GB".to_string()),
            storage: Some("128GB / 256GB".to_string()),
            price: Some("$749".to_string()),
            colors: None,
        },
        NewPhone {
            model_name: "Samsung Galaxy S22".to_string(),
            display: Some("6.1 inches Dynamic AMOLED 2X, 120Hz".to_string()),
            battery: Some("3700 mAh, 25W fast charging".to_string()),
            camera: Some("50MP main, 12MP ultra-wide, 10MP telephoto".to_string()),
            ram: Some("8GB".to_string()),
            storage: Some("128GB / 256GB".to_string()),
            price: Some("$699".to_string()),
            colors: None,
        },
        NewPhone {
            model_name: "Samsung Galaxy XCover 6 Pro".to_string(),
            display: Some("6.6 inches TFT, 120Hz".to_string()),
            battery: Some("4050 mAh, removable, 25W fast charging".to_string()),
            camera: Some("50MP main, 8MP ultra-wide".to_string()),
            ram: Some("6GB".to_string()),
            storage: Some("128GB".to_string()),
            price: Some("$599".to_string()),
            colors: None,
        },
        NewPhone {
            model_name: "Samsung Galaxy A05s".to_string(),
            display: Some("6.7 inches PLS LCD, 90Hz".to_string()),
            battery: Some("5000 mAh, 25W fast charging".to_string()),
            camera: Some("50MP main, 2MP macro, 2MP depth".to_string()),
            ram: Some("4GB / 6GB".to_string()),
            storage: Some("64GB / 128GB".to_string()),
            price: Some("$149".to_string()),
            colors: None,
        },
        NewPhone {
            model_name: "Samsung Galaxy M13".to_string(),
            display: Some("6.6 inches PLS LCD, 60Hz".to_string()),
            battery: Some("5000 mAh, 15W charging".to_string()),
            camera: Some("50MP main, 5MP ultra-wide, 2MP macro".to_string()),
            ram: Some("4GB / 6GB".to_string()),
            storage: Some("64GB / 128GB".to_string()),
            price: Some("$139".to_string()),
            colors: None,
        },
        NewPhone {
            model_name: "Samsung Galaxy F04".to_string(),
            display: Some("6.5 inches PLS LCD, 60Hz".to_string()),
            battery: Some("5000 mAh, 10W charging".to_string()),
            camera: Some("13MP main, 2MP depth".to_string()),
            ram: Some("4GB".to_string()),
            storage: Some("64GB".to_string()),
            price: Some("$99".to_string()),
            colors: None,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_model_names_unique_and_non_empty() {
        let phones = sample_catalog();
        let names: HashSet<&str> = phones.iter().map(|p| p.model_name.as_str()).collect();

        assert_eq!(names.len(), phones.len());
        assert!(phones.iter().all(|p| !p.model_name.trim().is_empty()));
    }

    #[test]
    fn test_every_phone_has_a_price() {
        assert!(sample_catalog().iter().all(|p| p.price.is_some()));
    }
}
