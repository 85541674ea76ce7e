// src/common/money.rs

use rust_decimal::{Decimal, RoundingStrategy};

/// Arredonda PARA CIMA em 2 casas decimais. Política do custo unitário:
/// um custo pequeno porém positivo nunca pode virar 0,00 na ponta.
/// Aplicada uma única vez por linha de custo, nunca nas somas seguintes.
pub fn ceil_to_cents(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, RoundingStrategy::ToPositiveInfinity)
}

/// Formata um valor em reais, sempre com 2 casas: "R$ 1.234,56".
pub fn format_brl(value: Decimal) -> String {
    let rounded = value.round_dp(2);
    let negative = rounded.is_sign_negative() && !rounded.is_zero();
    let text = format!("{:.2}", rounded.abs());
    let (int_part, frac_part) = text.split_once('.').unwrap_or((text.as_str(), "00"));

    let mut grouped = String::new();
    for (i, c) in int_part.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(c);
    }
    let int_grouped: String = grouped.chars().rev().collect();

    format!(
        "{}R$ {},{}",
        if negative { "-" } else { "" },
        int_grouped,
        frac_part
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ceil_nunca_zera_custo_positivo() {
        let custo = ceil_to_cents(Decimal::new(1, 4)); // 0.0001
        assert_eq!(custo, Decimal::new(1, 2)); // 0.01
    }

    #[test]
    fn ceil_sobe_na_terceira_casa() {
        // 10 / 3 = 3.333... -> 3.34, nunca 3.33
        let custo = ceil_to_cents(Decimal::from(10) / Decimal::from(3));
        assert_eq!(custo, Decimal::new(334, 2));
    }

    #[test]
    fn ceil_preserva_valor_exato() {
        assert_eq!(ceil_to_cents(Decimal::new(1350, 2)), Decimal::new(1350, 2));
    }

    #[test]
    fn formata_reais_com_milhar() {
        assert_eq!(format_brl(Decimal::new(123456, 2)), "R$ 1.234,56");
        assert_eq!(format_brl(Decimal::ZERO), "R$ 0,00");
        assert_eq!(format_brl(Decimal::new(-9050, 2)), "-R$ 90,50");
    }
}
