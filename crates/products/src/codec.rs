//! Product line encoding.
//!
//! ```text
//! Clothing,id,name,price,stock,size,color,material
//! Stationery,id,name,price,stock,brand,itemType
//! Accessory,id,name,price,stock,isElectronic(0|1),accessoryType
//! ```

use ishop_core::{LineRecord, parse_field, split_fields};

use crate::product::{Accessory, Clothing, Product, ProductDetails, ProductKind, Stationery};

impl ProductKind {
    /// Minimum number of fields a line of this kind must carry.
    pub fn field_count(&self) -> usize {
        match self {
            ProductKind::Clothing => 8,
            ProductKind::Stationery | ProductKind::Accessory => 7,
        }
    }
}

impl LineRecord for Product {
    fn to_line(&self) -> String {
        let head = format!(
            "{},{},{},{},{}",
            self.kind(),
            self.id(),
            self.name(),
            self.price(),
            self.stock()
        );
        match self.details() {
            ProductDetails::Clothing(c) => {
                format!("{head},{},{},{}", c.size, c.color, c.material)
            }
            ProductDetails::Stationery(s) => format!("{head},{},{}", s.brand, s.item_type),
            ProductDetails::Accessory(a) => format!(
                "{head},{},{}",
                if a.is_electronic { "1" } else { "0" },
                a.accessory_type
            ),
        }
    }

    fn from_line(line: &str) -> Option<Self> {
        let fields = split_fields(line);
        let kind = ProductKind::from_tag(fields.first()?)?;
        if fields.len() < kind.field_count() {
            return None;
        }

        let price: f64 = parse_field(fields[3])?;
        let stock: i64 = parse_field(fields[4])?;
        let details = match kind {
            ProductKind::Clothing => ProductDetails::Clothing(Clothing {
                size: fields[5].to_string(),
                color: fields[6].to_string(),
                material: fields[7].to_string(),
            }),
            ProductKind::Stationery => ProductDetails::Stationery(Stationery {
                brand: fields[5].to_string(),
                item_type: fields[6].to_string(),
            }),
            ProductKind::Accessory => ProductDetails::Accessory(Accessory {
                is_electronic: fields[5] == "1",
                accessory_type: fields[6].to_string(),
            }),
        };

        // Lines that would break a construction invariant are dropped like short ones.
        Product::new(fields[1], fields[2], price, stock, details).ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn notebook() -> Product {
        Product::new(
            "S1",
            "Spiral Notebook",
            149.5,
            40,
            ProductDetails::Stationery(Stationery {
                brand: "Dollar".to_string(),
                item_type: "Notebook".to_string(),
            }),
        )
        .unwrap()
    }

    #[test]
    fn encodes_each_variant_layout() {
        let shirt = Product::new(
            "C1",
            "Polo",
            20.0,
            5,
            ProductDetails::Clothing(Clothing {
                size: "L".to_string(),
                color: "White".to_string(),
                material: "Cotton".to_string(),
            }),
        )
        .unwrap();
        assert_eq!(shirt.to_line(), "Clothing,C1,Polo,20,5,L,White,Cotton");
        assert_eq!(
            notebook().to_line(),
            "Stationery,S1,Spiral Notebook,149.5,40,Dollar,Notebook"
        );

        let mouse = Product::new(
            "A7",
            "Mouse",
            999.99,
            0,
            ProductDetails::Accessory(Accessory {
                is_electronic: true,
                accessory_type: "Peripheral".to_string(),
            }),
        )
        .unwrap();
        assert_eq!(mouse.to_line(), "Accessory,A7,Mouse,999.99,0,1,Peripheral");
    }

    #[test]
    fn decodes_encoded_line() {
        let decoded = Product::from_line(&notebook().to_line()).unwrap();
        assert_eq!(decoded, notebook());
    }

    #[test]
    fn accessory_flag_is_one_for_electronic_only() {
        let decoded = Product::from_line("Accessory,A1,Cap,5,1,yes,Hat").unwrap();
        match decoded.details() {
            ProductDetails::Accessory(a) => assert!(!a.is_electronic),
            _ => panic!("Expected Accessory details"),
        }
    }

    #[test]
    fn empty_trailing_field_round_trips() {
        let line = "Clothing,C2,Scarf,12,3,,Red,";
        let decoded = Product::from_line(line).unwrap();
        assert_eq!(decoded.to_line(), line);
    }

    #[test]
    fn unknown_tag_is_ignored() {
        assert!(Product::from_line("Furniture,F1,Chair,10,1,Oak,Brown").is_none());
        assert!(Product::from_line("").is_none());
    }

    #[test]
    fn short_lines_are_skipped() {
        assert!(Product::from_line("Clothing,C1,Polo,20,5,L,White").is_none());
        assert!(Product::from_line("Stationery,S1,Pen,2,5,Parker").is_none());
        assert!(Product::from_line("Accessory,A1").is_none());
    }

    #[test]
    fn malformed_numbers_and_invariant_breaks_are_skipped() {
        assert!(Product::from_line("Stationery,S1,Pen,two,5,Parker,Pen").is_none());
        assert!(Product::from_line("Stationery,S1,Pen,2,many,Parker,Pen").is_none());
        assert!(Product::from_line("Stationery,S1,Pen,-2,5,Parker,Pen").is_none());
        assert!(Product::from_line("Stationery,S1,Pen,2,-5,Parker,Pen").is_none());
    }

    #[test]
    fn extra_fields_are_ignored() {
        let decoded = Product::from_line("Stationery,S1,Pen,2,5,Parker,Pen,extra").unwrap();
        assert_eq!(decoded.to_line(), "Stationery,S1,Pen,2,5,Parker,Pen");
    }

    #[cfg(test)]
    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        fn field() -> impl Strategy<Value = String> {
            "[A-Za-z0-9 ._-]{0,12}"
        }

        fn details() -> impl Strategy<Value = ProductDetails> {
            prop_oneof![
                (field(), field(), field()).prop_map(|(size, color, material)| {
                    ProductDetails::Clothing(Clothing { size, color, material })
                }),
                (field(), field()).prop_map(|(brand, item_type)| {
                    ProductDetails::Stationery(Stationery { brand, item_type })
                }),
                (any::<bool>(), field()).prop_map(|(is_electronic, accessory_type)| {
                    ProductDetails::Accessory(Accessory { is_electronic, accessory_type })
                }),
            ]
        }

        proptest! {
            /// Property: every variant survives an encode/decode cycle unchanged.
            #[test]
            fn product_line_round_trips(
                id in "[A-Z][A-Z0-9]{0,6}",
                name in field(),
                price in 0.0f64..1_000_000.0,
                stock in 0i64..100_000,
                details in details(),
            ) {
                let product = Product::new(id, name, price, stock, details).unwrap();
                let decoded = Product::from_line(&product.to_line());
                prop_assert_eq!(decoded, Some(product));
            }
        }
    }
}
