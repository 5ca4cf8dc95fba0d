use proc_macro::TokenStream;
use quote::quote;
use syn::parse::Parser;

/// Generate a color model from a struct definition.
///
/// The channel fields are made private and the struct gets `Clone`, `Debug`
/// and `PartialEq` derived. An unchecked constructor, `new_unchecked`, is
/// generated for use inside the crate, along with a read-only accessor for
/// each channel. Validating constructors are written by hand on each model.
#[proc_macro]
pub fn gen_model(input: TokenStream) -> TokenStream {
    let mut input = syn::parse_macro_input!(input as syn::ItemStruct);

    let syn::Fields::Named(ref mut named) = input.fields else {
        return quote! {
            compile_error!("Models must use named fields, one for each channel of the color.")
        }
        .into();
    };

    if named.named.is_empty() {
        return quote! {
            compile_error!("Models must have at least one channel.")
        }
        .into();
    }

    // Channels are only reachable through the generated accessors.
    named.named.iter_mut().for_each(|f| {
        f.vis = syn::Visibility::Inherited;
    });

    let field_names = named
        .named
        .iter()
        .filter_map(|f| f.ident.clone())
        .collect::<Vec<_>>();
    let field_types = named.named.iter().map(|f| f.ty.clone()).collect::<Vec<_>>();

    let attr = match syn::Attribute::parse_outer.parse2(quote! {
        #[derive(Clone, Debug, PartialEq)]
    }) {
        Ok(attr) => attr,
        Err(err) => return err.to_compile_error().into(),
    };
    input.attrs.extend(attr);

    let accessors = field_names.iter().zip(field_types.iter()).map(|(name, ty)| {
        let doc = format!("Return the `{}` channel of the color.", name);
        quote! {
            #[doc = #doc]
            pub fn #name(&self) -> #ty {
                ::core::clone::Clone::clone(&self.#name)
            }
        }
    });

    let struct_name = input.ident.clone();
    let (impl_gen, type_gen, where_clause) = input.generics.split_for_impl();

    let model_impl = quote! {
        impl #impl_gen #struct_name #type_gen #where_clause {
            /// Create the model without validating any of the channels.
            pub(crate) fn new_unchecked(#(#field_names: #field_types),*) -> Self {
                Self {
                    #(#field_names,)*
                }
            }

            #(#accessors)*
        }
    };

    quote! {
        #input
        #model_impl
    }
    .into()
}
