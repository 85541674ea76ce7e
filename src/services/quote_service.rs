// src/services/quote_service.rs

use rust_decimal::Decimal;
use uuid::Uuid;

use crate::common::money::ceil_to_cents;
use crate::models::catalog::{Extra, Material, Quote};

/// Itens precificáveis por cotação (insumos e embalagens). A regra de
/// resolução de preço é UMA só para os dois; este é o ponto de costura.
pub trait Quotable {
    fn base_price(&self) -> Option<Decimal>;
    fn quotes(&self) -> &[Quote];
    fn quotes_mut(&mut self) -> &mut Vec<Quote>;
    fn selected_quote_id(&self) -> Option<Uuid>;
    fn set_selected_quote(&mut self, id: Option<Uuid>);
    fn yield_factor(&self) -> Decimal;
}

impl Quotable for Material {
    fn base_price(&self) -> Option<Decimal> {
        self.price
    }
    fn quotes(&self) -> &[Quote] {
        &self.quotes
    }
    fn quotes_mut(&mut self) -> &mut Vec<Quote> {
        &mut self.quotes
    }
    fn selected_quote_id(&self) -> Option<Uuid> {
        self.selected_quote_id
    }
    fn set_selected_quote(&mut self, id: Option<Uuid>) {
        self.selected_quote_id = id;
    }
    fn yield_factor(&self) -> Decimal {
        self.yield_factor
    }
}

impl Quotable for Extra {
    fn base_price(&self) -> Option<Decimal> {
        self.price
    }
    fn quotes(&self) -> &[Quote] {
        &self.quotes
    }
    fn quotes_mut(&mut self) -> &mut Vec<Quote> {
        &mut self.quotes
    }
    fn selected_quote_id(&self) -> Option<Uuid> {
        self.selected_quote_id
    }
    fn set_selected_quote(&mut self, id: Option<Uuid>) {
        self.selected_quote_id = id;
    }
    fn yield_factor(&self) -> Decimal {
        self.yield_factor
    }
}

/// Resolve o preço vigente de um item: a cotação selecionada quando ainda
/// existe, senão a mais barata, senão o preço base cadastrado, senão zero.
pub fn resolve_price<T: Quotable>(item: &T) -> Decimal {
    if let Some(selected) = item.selected_quote_id() {
        if let Some(quote) = item.quotes().iter().find(|q| q.id == selected) {
            return quote.price;
        }
        // Seleção aponta para cotação removida: vale a mais barata.
    }
    item.quotes()
        .iter()
        .map(|q| q.price)
        .min()
        .or_else(|| item.base_price())
        .unwrap_or(Decimal::ZERO)
}

/// Custo por unidade de USO: preço ÷ rendimento, arredondado para cima em
/// 2 casas. Rendimento inválido (<= 0) é tratado como 1.
pub fn unit_cost(price: Decimal, yield_factor: Decimal) -> Decimal {
    let divisor = if yield_factor > Decimal::ZERO {
        yield_factor
    } else {
        Decimal::ONE
    };
    ceil_to_cents(price / divisor)
}

/// Preço resolvido + rendimento do próprio item, numa chamada só.
pub fn use_unit_cost<T: Quotable>(item: &T) -> Decimal {
    unit_cost(resolve_price(item), item.yield_factor())
}

/// Remove uma cotação. Se era a selecionada, a seleção é limpa e a regra
/// da mais barata volta a valer.
pub fn remove_quote<T: Quotable>(item: &mut T, quote_id: Uuid) {
    item.quotes_mut().retain(|q| q.id != quote_id);
    if item.selected_quote_id() == Some(quote_id) {
        item.set_selected_quote(None);
    }
}
